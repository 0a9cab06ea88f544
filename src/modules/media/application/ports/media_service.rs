use async_trait::async_trait;

use crate::modules::media::application::dto::{
    AiringScheduleQuery, MediaListQuery, MediaReviewsQuery, MediaThreadsQuery, SearchMediaQuery,
    SeasonalMediaQuery,
};
use crate::modules::media::domain::{
    AiringSchedule, GenreTagCollection, Media, Review, Thread,
};
use crate::shared::{application::Page, errors::AppResult};

/// Catalog query capability
///
/// One method per named query. Implementations execute exactly one request per
/// call and map the wire shape into domain records; they never retry or cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Media released in a season, ordered by the requested sort
    async fn seasonal_media(&self, query: SeasonalMediaQuery) -> AppResult<Page<Media>>;

    async fn trending_media(&self, query: MediaListQuery) -> AppResult<Page<Media>>;

    async fn popular_media(&self, query: MediaListQuery) -> AppResult<Page<Media>>;

    /// Airing schedules inside the query window, newest first
    async fn recently_updated(&self, query: AiringScheduleQuery) -> AppResult<Page<AiringSchedule>>;

    async fn search_media(&self, query: SearchMediaQuery) -> AppResult<Page<Media>>;

    /// Full media record including its connections
    async fn media_by_id(&self, media_id: i32) -> AppResult<Media>;

    /// Forum threads attached to a media
    async fn media_threads(&self, query: MediaThreadsQuery) -> AppResult<Page<Thread>>;

    async fn media_reviews(&self, query: MediaReviewsQuery) -> AppResult<Page<Review>>;

    /// Genre and tag names available as search filters
    async fn genre_tag_collection(&self) -> AppResult<GenreTagCollection>;
}
