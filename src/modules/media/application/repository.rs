use std::sync::Arc;

use crate::modules::media::application::dto::{
    AiringScheduleQuery, MediaListQuery, MediaReviewsQuery, MediaThreadsQuery, SearchMediaQuery,
    SeasonalMediaQuery,
};
use crate::modules::media::application::ports::MediaService;
use crate::modules::media::domain::{AiringSchedule, GenreTagCollection, Media, Review, Thread};
use crate::shared::{application::Page, errors::AppResult, utils::LogContext};

/// Catalog repository
///
/// Stable entry point for screens. Every method forwards to the service
/// unchanged and returns its outcome as-is: failures are only logged.
pub struct MediaRepository {
    service: Arc<dyn MediaService>,
}

impl MediaRepository {
    pub fn new(service: Arc<dyn MediaService>) -> Self {
        Self { service }
    }

    pub async fn seasonal_media(&self, query: SeasonalMediaQuery) -> AppResult<Page<Media>> {
        log::debug!(
            "Repository: seasonal media {} page {}",
            query.season,
            query.page
        );
        logged("seasonal_media", self.service.seasonal_media(query).await)
    }

    pub async fn trending_media(&self, query: MediaListQuery) -> AppResult<Page<Media>> {
        logged("trending_media", self.service.trending_media(query).await)
    }

    pub async fn popular_media(&self, query: MediaListQuery) -> AppResult<Page<Media>> {
        logged("popular_media", self.service.popular_media(query).await)
    }

    pub async fn recently_updated(
        &self,
        query: AiringScheduleQuery,
    ) -> AppResult<Page<AiringSchedule>> {
        logged("recently_updated", self.service.recently_updated(query).await)
    }

    pub async fn search_media(&self, query: SearchMediaQuery) -> AppResult<Page<Media>> {
        log::debug!(
            "Repository: search '{}' page {}",
            query.filters.normalized_search().unwrap_or_default(),
            query.page
        );
        logged("search_media", self.service.search_media(query).await)
    }

    pub async fn media_by_id(&self, media_id: i32) -> AppResult<Media> {
        logged("media_by_id", self.service.media_by_id(media_id).await)
    }

    pub async fn media_threads(&self, query: MediaThreadsQuery) -> AppResult<Page<Thread>> {
        logged("media_threads", self.service.media_threads(query).await)
    }

    pub async fn media_reviews(&self, query: MediaReviewsQuery) -> AppResult<Page<Review>> {
        logged("media_reviews", self.service.media_reviews(query).await)
    }

    pub async fn genre_tag_collection(&self) -> AppResult<GenreTagCollection> {
        logged(
            "genre_tag_collection",
            self.service.genre_tag_collection().await,
        )
    }
}

fn logged<T>(operation: &str, result: AppResult<T>) -> AppResult<T> {
    if let Err(e) = &result {
        LogContext::query_failed(operation, e);
    }
    result
}
