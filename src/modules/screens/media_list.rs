//! Paginated list screen with "load more"
//!
//! One list per category. A fresh load starts over at page 1; loading more
//! appends the next page while the server reports one.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::state_holder::{StateHolder, StateWatcher};
use crate::modules::media::application::dto::{
    AiringScheduleQuery, MediaListQuery, SearchFilters, SearchMediaQuery, SeasonalMediaQuery,
};
use crate::modules::media::domain::{MediaListItem, MediaType};
use crate::modules::media::MediaRepository;
use crate::modules::season::AnimeSeason;
use crate::shared::{
    application::{Page, PaginationParams},
    errors::AppResult,
    utils::LogContext,
};

/// What the list shows
#[derive(Debug, Clone, PartialEq)]
pub enum MediaListCategory {
    Trending,
    Popular,
    Seasonal(AnimeSeason),
    RecentlyUpdated,
    Search(SearchFilters),
}

impl MediaListCategory {
    pub fn name(&self) -> &'static str {
        match self {
            MediaListCategory::Trending => "trending",
            MediaListCategory::Popular => "popular",
            MediaListCategory::Seasonal(_) => "seasonal",
            MediaListCategory::RecentlyUpdated => "recently_updated",
            MediaListCategory::Search(_) => "search",
        }
    }
}

/// Paginated list state shared by every "load more" list
#[derive(Debug, Clone, PartialEq)]
pub struct PagedUiState<T> {
    pub page_number: u32,
    pub has_next_page: bool,
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub type MediaListUiState = PagedUiState<MediaListItem>;

impl<T> Default for PagedUiState<T> {
    fn default() -> Self {
        Self {
            page_number: 1,
            has_next_page: false,
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl<T: Clone> PagedUiState<T> {
    /// Loading state for a new request, or `None` when loading more is not
    /// possible right now
    pub fn begin(&self, load_more: bool) -> Option<Self> {
        let page_number = if load_more {
            if self.is_loading || !self.has_next_page {
                return None;
            }
            self.page_number + 1
        } else {
            1
        };
        Some(Self {
            page_number,
            is_loading: true,
            error: None,
            ..self.clone()
        })
    }

    /// Apply a finished request
    pub fn completed(&self, result: AppResult<Page<T>>, load_more: bool) -> Self {
        match result {
            Ok(page) => {
                let has_next_page = page.has_next_page();
                let items = if load_more {
                    self.items.iter().cloned().chain(page.data).collect()
                } else {
                    page.data
                };
                Self {
                    page_number: self.page_number,
                    has_next_page,
                    items,
                    is_loading: false,
                    error: None,
                }
            }
            Err(e) => Self {
                is_loading: false,
                error: Some(e.message().to_string()),
                ..self.clone()
            },
        }
    }
}

pub struct MediaListViewModel {
    repository: Arc<MediaRepository>,
    category: RwLock<MediaListCategory>,
    state: StateHolder<MediaListUiState>,
    per_page: u32,
    media_type: MediaType,
    /// Bumped by every fresh load; results of older requests are dropped
    generation: AtomicU64,
}

impl MediaListViewModel {
    pub fn new(
        repository: Arc<MediaRepository>,
        category: MediaListCategory,
        per_page: u32,
    ) -> Self {
        Self {
            repository,
            category: RwLock::new(category),
            state: StateHolder::new(MediaListUiState::default()),
            per_page,
            media_type: MediaType::Anime,
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn state(&self) -> MediaListUiState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateWatcher<MediaListUiState> {
        self.state.subscribe()
    }

    pub async fn category(&self) -> MediaListCategory {
        self.category.read().await.clone()
    }

    /// Switch category and start over from the first page
    pub async fn set_category(&self, category: MediaListCategory) {
        *self.category.write().await = category;
        self.load(false).await;
    }

    /// Fresh load (`load_more == false`) or the next page appended.
    ///
    /// Loading more is ignored while a request is in flight or once the
    /// server reported the last page. A failed page keeps the current items
    /// and the advanced page number.
    pub async fn load(&self, load_more: bool) {
        let generation = if load_more {
            self.generation.load(Ordering::SeqCst)
        } else {
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let mut requested = None;
        self.state.try_replace(|s| {
            let next = s.begin(load_more)?;
            requested = Some(next.page_number);
            Some(next)
        });
        let Some(page_number) = requested else {
            log::debug!("MediaList: load_more={} skipped", load_more);
            return;
        };

        let category = self.category().await;
        LogContext::screen_transition(category.name(), "loading");
        let pagination = PaginationParams::new(page_number, self.per_page);

        let Some(result) = self.state.scoped(self.fetch(&category, pagination)).await else {
            return;
        };

        let applied = self.state.try_replace(|s| {
            (self.generation.load(Ordering::SeqCst) == generation)
                .then(|| s.completed(result, load_more))
        });
        if applied {
            let state = self.state.snapshot();
            LogContext::screen_transition(
                category.name(),
                if state.error.is_some() { "failure" } else { "success" },
            );
        }
    }

    async fn fetch(
        &self,
        category: &MediaListCategory,
        pagination: PaginationParams,
    ) -> AppResult<Page<MediaListItem>> {
        let repo = &self.repository;
        let page = match category {
            MediaListCategory::Trending => repo
                .trending_media(MediaListQuery::new(pagination, self.media_type))
                .await?
                .map(MediaListItem::from),
            MediaListCategory::Popular => repo
                .popular_media(MediaListQuery::new(pagination, self.media_type))
                .await?
                .map(MediaListItem::from),
            MediaListCategory::Seasonal(season) => repo
                .seasonal_media(SeasonalMediaQuery::new(pagination, *season, self.media_type))
                .await?
                .map(MediaListItem::from),
            MediaListCategory::RecentlyUpdated => repo
                .recently_updated(AiringScheduleQuery::aired_before(
                    pagination,
                    Utc::now().timestamp(),
                ))
                .await?
                .map(MediaListItem::from),
            MediaListCategory::Search(filters) => repo
                .search_media(SearchMediaQuery::new(pagination, filters.clone()))
                .await?
                .map(MediaListItem::from),
        };
        Ok(page)
    }

    pub fn dispose(&self) {
        self.state.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::ports::MockMediaService;
    use crate::modules::media::domain::{AiringSchedule, Media};
    use crate::shared::application::PageInfo;
    use crate::shared::errors::AppError;

    fn page(ids: &[i32], has_next_page: bool) -> Page<Media> {
        Page::new(
            Some(PageInfo {
                has_next_page,
                ..Default::default()
            }),
            ids.iter().copied().map(Media::new).collect(),
        )
    }

    fn ids(state: &MediaListUiState) -> Vec<i32> {
        state.items.iter().map(MediaListItem::media_id).collect()
    }

    fn view_model(service: MockMediaService, category: MediaListCategory) -> MediaListViewModel {
        let repo = Arc::new(MediaRepository::new(Arc::new(service)));
        MediaListViewModel::new(repo, category, 2)
    }

    #[tokio::test]
    async fn test_load_more_appends_next_page() {
        let mut service = MockMediaService::new();
        service
            .expect_trending_media()
            .withf(|q| q.page == 1 && q.per_page == 2)
            .times(1)
            .returning(|_| Ok(page(&[1, 2], true)));
        service
            .expect_trending_media()
            .withf(|q| q.page == 2)
            .times(1)
            .returning(|_| Ok(page(&[3], false)));

        let vm = view_model(service, MediaListCategory::Trending);
        vm.load(false).await;
        assert_eq!(ids(&vm.state()), vec![1, 2]);
        assert!(vm.state().has_next_page);

        vm.load(true).await;
        let state = vm.state();
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.page_number, 2);
        assert!(!state.has_next_page);
        assert!(!state.is_loading);

        // Last page reached: no further request
        vm.load(true).await;
        assert_eq!(vm.state().page_number, 2);
    }

    #[tokio::test]
    async fn test_failed_page_keeps_items_and_page_number() {
        let mut service = MockMediaService::new();
        service
            .expect_popular_media()
            .withf(|q| q.page == 1)
            .returning(|_| Ok(page(&[1], true)));
        service
            .expect_popular_media()
            .withf(|q| q.page == 2)
            .returning(|_| Err(AppError::ExternalServiceError("timeout".into())));

        let vm = view_model(service, MediaListCategory::Popular);
        vm.load(false).await;
        vm.load(true).await;

        let state = vm.state();
        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.page_number, 2);
        assert_eq!(state.error.as_deref(), Some("timeout"));
        assert!(state.has_next_page);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_fresh_load_resets_to_first_page() {
        let mut service = MockMediaService::new();
        service
            .expect_trending_media()
            .withf(|q| q.page == 1)
            .times(2)
            .returning(|_| Ok(page(&[7, 8], true)));
        service
            .expect_trending_media()
            .withf(|q| q.page == 2)
            .times(1)
            .returning(|_| Ok(page(&[9], true)));

        let vm = view_model(service, MediaListCategory::Trending);
        vm.load(false).await;
        vm.load(true).await;
        vm.load(false).await;

        let state = vm.state();
        assert_eq!(state.page_number, 1);
        assert_eq!(ids(&state), vec![7, 8]);
    }

    #[tokio::test]
    async fn test_recently_updated_yields_schedule_entries() {
        let mut service = MockMediaService::new();
        service
            .expect_recently_updated()
            .withf(|q| q.airing_at_lesser.is_some() && q.airing_at_greater.is_none())
            .returning(|_| {
                Ok(Page::new(
                    None,
                    vec![AiringSchedule {
                        id: 1,
                        airing_at: 100,
                        episode: 12,
                        media: Media::new(40),
                    }],
                ))
            });

        let vm = view_model(service, MediaListCategory::RecentlyUpdated);
        vm.load(false).await;

        let state = vm.state();
        assert_eq!(state.items[0].episode(), Some(12));
        assert_eq!(state.items[0].media_id(), 40);
        // No page info means no next page
        assert!(!state.has_next_page);
    }

    #[tokio::test]
    async fn test_set_category_reloads() {
        let mut service = MockMediaService::new();
        service
            .expect_search_media()
            .withf(|q| q.page == 1 && q.filters.normalized_search() == Some("mushishi"))
            .times(1)
            .returning(|_| Ok(page(&[457], false)));

        let vm = view_model(service, MediaListCategory::Trending);
        vm.set_category(MediaListCategory::Search(SearchFilters::text("mushishi")))
            .await;

        assert_eq!(ids(&vm.state()), vec![457]);
        assert_eq!(vm.category().await.name(), "search");
    }

    #[tokio::test]
    async fn test_load_more_before_first_load_is_ignored() {
        let vm = view_model(MockMediaService::new(), MediaListCategory::Trending);
        vm.load(true).await;
        assert_eq!(vm.state(), MediaListUiState::default());
    }
}
