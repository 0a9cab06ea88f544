//! Home screen: five catalog rows loaded together
//!
//! The rows are fetched concurrently and merged all-or-nothing: a single
//! failing row turns the whole screen into an error state with no lists.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::state_holder::{StateHolder, StateWatcher};
use crate::modules::media::application::dto::{
    AiringScheduleQuery, MediaListQuery, SeasonalMediaQuery,
};
use crate::modules::media::domain::{AiringSchedule, Media, MediaType};
use crate::modules::media::MediaRepository;
use crate::modules::season::AnimeSeason;
use crate::shared::{
    application::{Page, PaginationParams},
    config::AniListConfig,
    errors::AppResult,
    utils::LogContext,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeUiState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub trending: Option<Vec<Media>>,
    pub recently_updated: Option<Vec<AiringSchedule>>,
    pub this_season: Option<Vec<Media>>,
    pub popular: Option<Vec<Media>>,
    pub next_season: Option<Vec<Media>>,
}

impl HomeUiState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    /// Join the five row results.
    ///
    /// Every row must succeed for the lists to be kept. When several rows
    /// fail, the first one in declaration order supplies the error.
    pub fn merge(
        trending: AppResult<Page<Media>>,
        recently_updated: AppResult<Page<AiringSchedule>>,
        this_season: AppResult<Page<Media>>,
        popular: AppResult<Page<Media>>,
        next_season: AppResult<Page<Media>>,
    ) -> Self {
        match (trending, recently_updated, this_season, popular, next_season) {
            (Ok(trending), Ok(recently_updated), Ok(this_season), Ok(popular), Ok(next_season)) => {
                Self {
                    is_loading: false,
                    error: None,
                    trending: Some(trending.data),
                    recently_updated: Some(recently_updated.data),
                    this_season: Some(this_season.data),
                    popular: Some(popular.data),
                    next_season: Some(next_season.data),
                }
            }
            (trending, recently_updated, this_season, popular, next_season) => {
                let error = [
                    trending.err(),
                    recently_updated.err(),
                    this_season.err(),
                    popular.err(),
                    next_season.err(),
                ]
                .into_iter()
                .flatten()
                .next()
                .map(|e| e.message().to_string());

                Self {
                    is_loading: false,
                    error,
                    ..Default::default()
                }
            }
        }
    }
}

pub struct HomeViewModel {
    repository: Arc<MediaRepository>,
    state: StateHolder<HomeUiState>,
    current_season: AnimeSeason,
    next_season: AnimeSeason,
    per_page: u32,
    /// Bumped by every load; an overlapping older load never overwrites a newer one
    generation: AtomicU64,
}

impl HomeViewModel {
    pub fn new(repository: Arc<MediaRepository>, config: &AniListConfig) -> Self {
        Self::with_season(repository, AnimeSeason::now(), config.home_per_page)
    }

    pub fn with_season(
        repository: Arc<MediaRepository>,
        current_season: AnimeSeason,
        per_page: u32,
    ) -> Self {
        Self {
            repository,
            state: StateHolder::new(HomeUiState::default()),
            current_season,
            next_season: current_season.next(),
            per_page,
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> HomeUiState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateWatcher<HomeUiState> {
        self.state.subscribe()
    }

    pub fn current_season(&self) -> AnimeSeason {
        self.current_season
    }

    pub fn next_season(&self) -> AnimeSeason {
        self.next_season
    }

    /// Load every row; also the retry action after a failure
    pub async fn load(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LogContext::screen_transition("home", "loading");
        self.state.replace(|_| HomeUiState::loading());

        let first_page = PaginationParams::first(self.per_page);
        let now = Utc::now().timestamp();
        let repo = &self.repository;

        let joined = self
            .state
            .scoped(async {
                tokio::join!(
                    repo.trending_media(MediaListQuery::new(first_page, MediaType::Anime)),
                    repo.recently_updated(AiringScheduleQuery::aired_before(first_page, now)),
                    repo.seasonal_media(SeasonalMediaQuery::new(
                        first_page,
                        self.current_season,
                        MediaType::Anime,
                    )),
                    repo.popular_media(MediaListQuery::new(first_page, MediaType::Anime)),
                    repo.seasonal_media(SeasonalMediaQuery::new(
                        first_page,
                        self.next_season,
                        MediaType::Anime,
                    )),
                )
            })
            .await;

        let Some((trending, recently_updated, this_season, popular, next_season)) = joined else {
            log::debug!("Home: disposed before rows arrived");
            return;
        };

        let merged = HomeUiState::merge(trending, recently_updated, this_season, popular, next_season);
        let transition = if merged.error.is_some() { "failure" } else { "success" };
        let current = |generation| self.generation.load(Ordering::SeqCst) == generation;
        let applied = self
            .state
            .try_replace(|_| current(generation).then_some(merged));
        if applied {
            LogContext::screen_transition("home", transition);
        } else {
            log::debug!("Home: dropped rows of a superseded load");
        }
    }

    pub fn dispose(&self) {
        self.state.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::dto::{
        MediaReviewsQuery, MediaThreadsQuery, SearchMediaQuery,
    };
    use crate::modules::media::application::ports::MockMediaService;
    use crate::modules::media::domain::{GenreTagCollection, Review, Thread};
    use crate::modules::media::MediaService;
    use crate::modules::season::Season;
    use crate::shared::application::PageInfo;
    use crate::shared::errors::AppError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    /// Catalog whose first trending request waits for `gate` and then
    /// answers `first`; every other request answers at once
    struct GatedCatalog {
        gate: Arc<Notify>,
        first: AppResult<Page<Media>>,
        trending_calls: AtomicUsize,
    }

    #[async_trait]
    impl MediaService for GatedCatalog {
        async fn seasonal_media(&self, _query: SeasonalMediaQuery) -> AppResult<Page<Media>> {
            Ok(media_page(&[3]))
        }

        async fn trending_media(&self, _query: MediaListQuery) -> AppResult<Page<Media>> {
            if self.trending_calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
                return self.first.clone();
            }
            Ok(media_page(&[1, 2]))
        }

        async fn popular_media(&self, _query: MediaListQuery) -> AppResult<Page<Media>> {
            Ok(media_page(&[4]))
        }

        async fn recently_updated(
            &self,
            _query: AiringScheduleQuery,
        ) -> AppResult<Page<AiringSchedule>> {
            Ok(schedule_page(&[5]))
        }

        async fn search_media(&self, _query: SearchMediaQuery) -> AppResult<Page<Media>> {
            Ok(Page::empty())
        }

        async fn media_by_id(&self, media_id: i32) -> AppResult<Media> {
            Ok(Media::new(media_id))
        }

        async fn media_threads(&self, _query: MediaThreadsQuery) -> AppResult<Page<Thread>> {
            Ok(Page::empty())
        }

        async fn media_reviews(&self, _query: MediaReviewsQuery) -> AppResult<Page<Review>> {
            Ok(Page::empty())
        }

        async fn genre_tag_collection(&self) -> AppResult<GenreTagCollection> {
            Ok(GenreTagCollection::default())
        }
    }

    fn gated_view_model(gate: Arc<Notify>, first: AppResult<Page<Media>>) -> HomeViewModel {
        let catalog = GatedCatalog {
            gate,
            first,
            trending_calls: AtomicUsize::new(0),
        };
        let repo = Arc::new(MediaRepository::new(Arc::new(catalog)));
        HomeViewModel::with_season(repo, spring_2024(), 10)
    }

    fn media_page(ids: &[i32]) -> Page<Media> {
        Page::new(
            Some(PageInfo {
                total: Some(100),
                has_next_page: true,
                ..Default::default()
            }),
            ids.iter().copied().map(Media::new).collect(),
        )
    }

    fn schedule_page(ids: &[i32]) -> Page<AiringSchedule> {
        Page::new(
            None,
            ids.iter()
                .map(|&id| AiringSchedule {
                    id,
                    airing_at: 1_700_000_000,
                    episode: 1,
                    media: Media::new(id * 10),
                })
                .collect(),
        )
    }

    fn spring_2024() -> AnimeSeason {
        AnimeSeason::new(2024, Season::Spring)
    }

    fn service_with(fail_popular: bool, fail_trending: bool) -> MockMediaService {
        let mut service = MockMediaService::new();
        service.expect_trending_media().times(1).returning(move |_| {
            if fail_trending {
                Err(AppError::ApiError("trending down".into()))
            } else {
                Ok(media_page(&[1, 2]))
            }
        });
        service
            .expect_recently_updated()
            .times(1)
            .returning(|_| Ok(schedule_page(&[5])));
        service
            .expect_seasonal_media()
            .withf(|q| q.season == AnimeSeason::new(2024, Season::Spring))
            .times(1)
            .returning(|_| Ok(media_page(&[3])));
        service
            .expect_seasonal_media()
            .withf(|q| q.season == AnimeSeason::new(2024, Season::Summer))
            .times(1)
            .returning(|_| Ok(media_page(&[])));
        service.expect_popular_media().times(1).returning(move |_| {
            if fail_popular {
                Err(AppError::ExternalServiceError("popular down".into()))
            } else {
                Ok(media_page(&[4]))
            }
        });
        service
    }

    fn view_model(service: MockMediaService) -> HomeViewModel {
        let repo = Arc::new(MediaRepository::new(Arc::new(service)));
        HomeViewModel::with_season(repo, spring_2024(), 10)
    }

    #[tokio::test]
    async fn test_all_rows_succeed() {
        let vm = view_model(service_with(false, false));
        assert_eq!(vm.next_season(), AnimeSeason::new(2024, Season::Summer));

        vm.load().await;
        let state = vm.state();

        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.trending, Some(media_page(&[1, 2]).data));
        assert_eq!(state.recently_updated, Some(schedule_page(&[5]).data));
        assert_eq!(state.this_season, Some(media_page(&[3]).data));
        assert_eq!(state.popular, Some(media_page(&[4]).data));
        // An empty row is still a successful row
        assert_eq!(state.next_season, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_single_failure_clears_every_row() {
        let vm = view_model(service_with(true, false));
        vm.load().await;
        let state = vm.state();

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("popular down"));
        assert!(state.trending.is_none());
        assert!(state.recently_updated.is_none());
        assert!(state.this_season.is_none());
        assert!(state.popular.is_none());
        assert!(state.next_season.is_none());
    }

    #[tokio::test]
    async fn test_first_declared_failure_wins() {
        let vm = view_model(service_with(true, true));
        vm.load().await;
        assert_eq!(vm.state().error.as_deref(), Some("trending down"));
    }

    #[tokio::test]
    async fn test_disposed_screen_ignores_results() {
        let vm = view_model(MockMediaService::new());
        vm.dispose();
        vm.load().await;
        assert_eq!(vm.state(), HomeUiState::default());
    }

    #[tokio::test]
    async fn test_subscribers_see_loading_snapshot() {
        let gate = Arc::new(Notify::new());
        let vm = gated_view_model(Arc::clone(&gate), Ok(media_page(&[1, 2])));
        let mut watcher = vm.subscribe();

        let observe = async {
            watcher.changed().await.unwrap();
            let snapshot = watcher.borrow_and_update().clone();
            gate.notify_one();
            snapshot
        };
        let ((), loading) = tokio::join!(vm.load(), observe);

        assert_eq!(loading, HomeUiState::loading());
        assert!(loading.is_loading);
        assert!(loading.trending.is_none() && loading.next_season.is_none());

        let state = vm.state();
        assert!(!state.is_loading);
        assert_eq!(state.trending, Some(media_page(&[1, 2]).data));
    }

    #[tokio::test]
    async fn test_superseded_load_does_not_overwrite_newer_rows() {
        let gate = Arc::new(Notify::new());
        let vm = gated_view_model(
            Arc::clone(&gate),
            Err(AppError::ExternalServiceError("stale failure".into())),
        );

        let retry = async {
            vm.load().await;
            assert_eq!(vm.state().error, None);
            gate.notify_one();
        };
        tokio::join!(vm.load(), retry);

        let state = vm.state();
        assert_eq!(state.error, None);
        assert_eq!(state.trending, Some(media_page(&[1, 2]).data));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_merge_is_all_or_nothing() {
        let state = HomeUiState::merge(
            Ok(media_page(&[1])),
            Ok(schedule_page(&[])),
            Ok(media_page(&[2])),
            Ok(media_page(&[3])),
            Err(AppError::NotFound("gone".into())),
        );
        assert_eq!(state.error.as_deref(), Some("gone"));
        assert_eq!(state.trending, None);
        assert_eq!(state.recently_updated, None);
    }
}
