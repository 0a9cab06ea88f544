//! Search screen: filterable media list plus the genre/tag options

use std::sync::Arc;

use super::media_list::{MediaListCategory, MediaListUiState, MediaListViewModel};
use super::state_holder::{StateHolder, StateWatcher};
use crate::modules::media::application::dto::SearchFilters;
use crate::modules::media::domain::TagOption;
use crate::modules::media::MediaRepository;
use crate::shared::{config::AniListConfig, utils::LogContext};

/// Filter options offered by the search screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchUiState {
    pub filters: SearchFilters,
    pub genres: Vec<String>,
    pub tags: Vec<TagOption>,
    pub is_loading_options: bool,
    pub error: Option<String>,
}

impl SearchUiState {
    pub fn has_options(&self) -> bool {
        !self.genres.is_empty() || !self.tags.is_empty()
    }
}

pub struct SearchViewModel {
    repository: Arc<MediaRepository>,
    results: MediaListViewModel,
    state: StateHolder<SearchUiState>,
}

impl SearchViewModel {
    pub fn new(repository: Arc<MediaRepository>, config: &AniListConfig) -> Self {
        let results = MediaListViewModel::new(
            Arc::clone(&repository),
            MediaListCategory::Search(SearchFilters::default()),
            config.per_page,
        );
        Self {
            repository,
            results,
            state: StateHolder::new(SearchUiState::default()),
        }
    }

    pub fn state(&self) -> SearchUiState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateWatcher<SearchUiState> {
        self.state.subscribe()
    }

    pub fn results(&self) -> MediaListUiState {
        self.results.state()
    }

    pub fn subscribe_results(&self) -> StateWatcher<MediaListUiState> {
        self.results.subscribe()
    }

    /// Run a new search from the first page
    pub async fn search(&self, filters: SearchFilters) {
        self.state.replace(|s| SearchUiState {
            filters: filters.clone(),
            ..s.clone()
        });
        self.results
            .set_category(MediaListCategory::Search(filters))
            .await;
    }

    pub async fn load_more(&self) {
        self.results.load(true).await;
    }

    /// Load genre and tag options; later calls reuse what was loaded
    pub async fn genre_tag_collection(&self) {
        let started = self.state.try_replace(|s| {
            (!s.has_options() && !s.is_loading_options).then(|| SearchUiState {
                is_loading_options: true,
                error: None,
                ..s.clone()
            })
        });
        if !started {
            return;
        }

        LogContext::screen_transition("search", "loading options");
        let Some(result) = self
            .state
            .scoped(self.repository.genre_tag_collection())
            .await
        else {
            return;
        };

        self.state.replace(|s| match result {
            Ok(collection) => SearchUiState {
                genres: collection.genres,
                tags: collection.tags,
                is_loading_options: false,
                error: None,
                ..s.clone()
            },
            Err(e) => SearchUiState {
                is_loading_options: false,
                error: Some(e.message().to_string()),
                ..s.clone()
            },
        });
    }

    pub fn dispose(&self) {
        self.results.dispose();
        self.state.dispose();
    }
}
