//! Media details screen with forum threads and reviews tabs

use std::future::Future;
use std::sync::Arc;

use super::media_list::PagedUiState;
use super::state_holder::{StateHolder, StateWatcher};
use crate::modules::media::application::dto::{MediaReviewsQuery, MediaThreadsQuery};
use crate::modules::media::domain::{Media, Review, Thread};
use crate::modules::media::MediaRepository;
use crate::shared::{
    application::{Page, PaginationParams},
    config::AniListConfig,
    errors::AppResult,
    utils::LogContext,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaDetailsUiState {
    pub media_id: Option<i32>,
    pub details: Option<Media>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub threads: PagedUiState<Thread>,
    pub reviews: PagedUiState<Review>,
}

pub struct MediaDetailsViewModel {
    repository: Arc<MediaRepository>,
    state: StateHolder<MediaDetailsUiState>,
    per_page: u32,
}

impl MediaDetailsViewModel {
    pub fn new(repository: Arc<MediaRepository>, config: &AniListConfig) -> Self {
        Self {
            repository,
            state: StateHolder::new(MediaDetailsUiState::default()),
            per_page: config.per_page,
        }
    }

    pub fn state(&self) -> MediaDetailsUiState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateWatcher<MediaDetailsUiState> {
        self.state.subscribe()
    }

    /// Fetch the full record. Switching to another media clears its tabs.
    pub async fn load(&self, media_id: i32) {
        LogContext::screen_transition("details", "loading");
        self.state.replace(|s| {
            if s.media_id == Some(media_id) {
                MediaDetailsUiState {
                    is_loading: true,
                    error: None,
                    ..s.clone()
                }
            } else {
                MediaDetailsUiState {
                    media_id: Some(media_id),
                    is_loading: true,
                    ..Default::default()
                }
            }
        });

        let Some(result) = self
            .state
            .scoped(self.repository.media_by_id(media_id))
            .await
        else {
            return;
        };

        self.state.try_replace(|s| {
            if s.media_id != Some(media_id) {
                return None;
            }
            Some(match result {
                Ok(media) => MediaDetailsUiState {
                    details: Some(media),
                    is_loading: false,
                    error: None,
                    ..s.clone()
                },
                Err(e) => MediaDetailsUiState {
                    is_loading: false,
                    error: Some(e.message().to_string()),
                    ..s.clone()
                },
            })
        });
    }

    pub async fn load_threads(&self, load_more: bool) {
        let repo = &self.repository;
        self.load_tab(
            load_more,
            |s| &mut s.threads,
            |media_id, pagination| {
                repo.media_threads(MediaThreadsQuery {
                    media_id,
                    page: pagination.page,
                    per_page: pagination.per_page,
                })
            },
        )
        .await;
    }

    pub async fn load_reviews(&self, load_more: bool) {
        let repo = &self.repository;
        self.load_tab(
            load_more,
            |s| &mut s.reviews,
            |media_id, pagination| {
                repo.media_reviews(MediaReviewsQuery {
                    media_id,
                    page: pagination.page,
                    per_page: pagination.per_page,
                })
            },
        )
        .await;
    }

    /// Paginated tab of the current media, with the same rules as any
    /// "load more" list
    async fn load_tab<T, Tab, Fetch, Fut>(&self, load_more: bool, tab: Tab, fetch: Fetch)
    where
        T: Clone,
        Tab: Fn(&mut MediaDetailsUiState) -> &mut PagedUiState<T>,
        Fetch: FnOnce(i32, PaginationParams) -> Fut,
        Fut: Future<Output = AppResult<Page<T>>>,
    {
        let mut requested = None;
        self.state.try_replace(|s| {
            let media_id = s.media_id?;
            let mut next = s.clone();
            let paged = tab(&mut next);
            *paged = paged.begin(load_more)?;
            requested = Some((media_id, paged.page_number));
            Some(next)
        });
        let Some((media_id, page_number)) = requested else {
            return;
        };

        let pagination = PaginationParams::new(page_number, self.per_page);
        let Some(result) = self.state.scoped(fetch(media_id, pagination)).await else {
            return;
        };

        self.state.try_replace(|s| {
            if s.media_id != Some(media_id) {
                return None;
            }
            let mut next = s.clone();
            let paged = tab(&mut next);
            *paged = paged.completed(result, load_more);
            Some(next)
        });
    }

    /// Flip the favourite flag in the snapshot ahead of any server round trip.
    /// Returns the new value, or `None` before the details have loaded.
    pub fn toggle_favourite_local(&self) -> Option<bool> {
        let mut toggled = None;
        self.state.try_replace(|s| {
            let mut media = s.details.clone()?;
            media.set_favourite(!media.is_favourite);
            toggled = Some(media.is_favourite);
            Some(MediaDetailsUiState {
                details: Some(media),
                ..s.clone()
            })
        });
        toggled
    }

    pub fn dispose(&self) {
        self.state.dispose();
    }
}
