use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

use super::{
    dto::{GenreTagCollectionData, GraphQlRequest, MediaData, PageData},
    mapper::AniListMapper,
    queries::*,
    transport::{GraphQlTransport, HttpTransport},
};
use crate::modules::media::application::dto::{
    AiringScheduleQuery, MediaListQuery, MediaReviewsQuery, MediaThreadsQuery, SearchMediaQuery,
    SeasonalMediaQuery,
};
use crate::modules::media::application::ports::MediaService;
use crate::modules::media::domain::{
    AiringSchedule, GenreTagCollection, Media, MediaFormat, MediaSort, Review, Thread,
};
use crate::shared::{
    application::Page,
    config::AniListConfig,
    errors::{AppError, AppResult},
    utils::{LogContext, TimedOperation},
};

/// AniList implementation of the catalog service
///
/// Long-lived and shared: it holds no per-request state, so one instance serves
/// every screen concurrently.
pub struct AniListClient {
    transport: Arc<dyn GraphQlTransport>,
    mapper: AniListMapper,
}

impl AniListClient {
    /// Client talking HTTP to the configured endpoint
    pub fn new(config: &AniListConfig) -> AppResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn GraphQlTransport>) -> Self {
        Self {
            transport,
            mapper: AniListMapper::new(),
        }
    }

    /// Execute a named operation and deserialize its `data`
    async fn query<T>(&self, operation: &str, query: &str, variables: Value) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("AniList: {} variables: {}", operation, variables);
        LogContext::api_call("AniList", operation, "started", None);
        let timer = TimedOperation::new(operation);

        let result = self
            .transport
            .execute(GraphQlRequest::new(operation, query, variables))
            .await;

        let status = if result.is_ok() { "ok" } else { "failed" };
        LogContext::api_call("AniList", operation, status, Some(timer.elapsed_ms()));

        let data = result?;
        serde_json::from_value(data).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse AniList {} response: {}",
                operation, e
            ))
        })
    }

    fn sort_variable(sort: &[MediaSort]) -> Value {
        json!(MediaSort::to_graphql_list(sort))
    }

    fn search_variables(query: &SearchMediaQuery) -> Value {
        let filters = &query.filters;
        let format: Vec<&str> = filters
            .format
            .iter()
            .filter_map(MediaFormat::as_graphql)
            .collect();
        let season = filters.season.as_ref();

        json!({
            "page": query.page,
            "perPage": query.per_page,
            "search": filters.normalized_search(),
            "type": filters.media_type.and_then(|t| t.as_graphql()),
            "format": if format.is_empty() { None } else { Some(format) },
            "status": filters.status.and_then(|s| s.as_graphql()),
            "genres": if filters.genres.is_empty() { None } else { Some(&filters.genres) },
            "tags": if filters.tags.is_empty() { None } else { Some(&filters.tags) },
            "countryOfOrigin": filters.country_of_origin,
            "season": season.and_then(|s| s.season.as_graphql()),
            "seasonYear": season.map(|s| s.year),
            "sort": Self::sort_variable(&filters.effective_sort()),
        })
    }
}

#[async_trait]
impl MediaService for AniListClient {
    async fn seasonal_media(&self, query: SeasonalMediaQuery) -> AppResult<Page<Media>> {
        let season = query.season.season.as_graphql().ok_or_else(|| {
            AppError::InvalidInput(format!("Cannot query unknown season {}", query.season))
        })?;
        let sort = if query.sort.is_empty() {
            vec![MediaSort::Popularity]
        } else {
            query.sort.clone()
        };

        let variables = json!({
            "page": query.page,
            "perPage": query.per_page,
            "season": season,
            "seasonYear": query.season.year,
            "type": query.media_type.as_graphql(),
            "sort": Self::sort_variable(&sort),
        });

        let data: PageData = self
            .query("SeasonalMedia", SEASONAL_MEDIA_QUERY, variables)
            .await?;
        let page = self.mapper.media_page(data.page);
        info!(
            "AniList: {} returned {} media (page {})",
            query.season,
            page.len(),
            query.page
        );
        Ok(page)
    }

    async fn trending_media(&self, query: MediaListQuery) -> AppResult<Page<Media>> {
        let variables = json!({
            "page": query.page,
            "perPage": query.per_page,
            "type": query.media_type.as_graphql(),
        });

        let data: PageData = self
            .query("TrendingMedia", TRENDING_MEDIA_QUERY, variables)
            .await?;
        Ok(self.mapper.media_page(data.page))
    }

    async fn popular_media(&self, query: MediaListQuery) -> AppResult<Page<Media>> {
        let variables = json!({
            "page": query.page,
            "perPage": query.per_page,
            "type": query.media_type.as_graphql(),
        });

        let data: PageData = self
            .query("PopularMedia", POPULAR_MEDIA_QUERY, variables)
            .await?;
        Ok(self.mapper.media_page(data.page))
    }

    async fn recently_updated(&self, query: AiringScheduleQuery) -> AppResult<Page<AiringSchedule>> {
        let variables = json!({
            "page": query.page,
            "perPage": query.per_page,
            "airingAtGreater": query.airing_at_greater,
            "airingAtLesser": query.airing_at_lesser,
        });

        let data: PageData = self
            .query("AiringSchedule", AIRING_SCHEDULE_QUERY, variables)
            .await?;
        Ok(self.mapper.airing_schedule_page(data.page))
    }

    async fn search_media(&self, query: SearchMediaQuery) -> AppResult<Page<Media>> {
        let variables = Self::search_variables(&query);

        let data: PageData = self
            .query("SearchMedia", SEARCH_MEDIA_QUERY, variables)
            .await?;
        let page = self.mapper.media_page(data.page);
        info!(
            "AniList: search '{}' returned {} results",
            query.filters.normalized_search().unwrap_or_default(),
            page.len()
        );
        Ok(page)
    }

    async fn media_by_id(&self, media_id: i32) -> AppResult<Media> {
        let data: MediaData = self
            .query(
                "MediaDetails",
                MEDIA_DETAILS_QUERY,
                json!({ "mediaId": media_id }),
            )
            .await?;

        data.media
            .and_then(|dto| self.mapper.media(dto))
            .ok_or_else(|| AppError::NotFound(format!("Media {} not found", media_id)))
    }

    async fn media_threads(&self, query: MediaThreadsQuery) -> AppResult<Page<Thread>> {
        let variables = json!({
            "mediaId": query.media_id,
            "page": query.page,
            "perPage": query.per_page,
        });

        let data: PageData = self
            .query("MediaThreads", MEDIA_THREADS_QUERY, variables)
            .await?;
        Ok(self.mapper.thread_page(data.page))
    }

    async fn media_reviews(&self, query: MediaReviewsQuery) -> AppResult<Page<Review>> {
        let variables = json!({
            "mediaId": query.media_id,
            "page": query.page,
            "perPage": query.per_page,
        });

        let data: PageData = self
            .query("MediaReviews", MEDIA_REVIEWS_QUERY, variables)
            .await?;
        Ok(self.mapper.review_page(data.page))
    }

    async fn genre_tag_collection(&self) -> AppResult<GenreTagCollection> {
        let data: GenreTagCollectionData = self
            .query("GenreTagCollection", GENRE_TAG_COLLECTION_QUERY, json!({}))
            .await?;
        Ok(self.mapper.genre_tag_collection(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::dto::SearchFilters;
    use crate::modules::media::domain::{MediaStatus, MediaType};
    use crate::modules::provider::infrastructure::anilist::transport::MockGraphQlTransport;
    use crate::modules::season::{AnimeSeason, Season};
    use crate::shared::application::PaginationParams;

    #[test]
    fn test_search_variables_omit_empty_filters() {
        let query = SearchMediaQuery::new(PaginationParams::first(25), SearchFilters::text(" "));
        let vars = AniListClient::search_variables(&query);
        assert!(vars["search"].is_null());
        assert!(vars["format"].is_null());
        assert!(vars["genres"].is_null());
        assert_eq!(vars["sort"], json!(["POPULARITY_DESC"]));
    }

    #[test]
    fn test_search_variables_with_filters() {
        let filters = SearchFilters {
            search: Some("frieren".to_string()),
            media_type: Some(MediaType::Anime),
            format: vec![MediaFormat::Tv, MediaFormat::Movie],
            status: Some(MediaStatus::Finished),
            genres: vec!["Fantasy".to_string()],
            country_of_origin: Some("JP".to_string()),
            season: Some(AnimeSeason::new(2023, Season::Fall)),
            ..Default::default()
        };
        let vars = AniListClient::search_variables(&SearchMediaQuery::new(
            PaginationParams::new(3, 25),
            filters,
        ));
        assert_eq!(vars["page"], 3);
        assert_eq!(vars["type"], "ANIME");
        assert_eq!(vars["format"], json!(["TV", "MOVIE"]));
        assert_eq!(vars["status"], "FINISHED");
        assert_eq!(vars["genres"], json!(["Fantasy"]));
        assert_eq!(vars["season"], "FALL");
        assert_eq!(vars["seasonYear"], 2023);
        assert_eq!(vars["sort"], json!(["SEARCH_MATCH"]));
    }

    #[tokio::test]
    async fn test_unknown_season_is_rejected_before_request() {
        let mut transport = MockGraphQlTransport::new();
        transport.expect_execute().never();

        let client = AniListClient::with_transport(Arc::new(transport));
        let query = SeasonalMediaQuery::new(
            PaginationParams::first(10),
            AnimeSeason::new(2024, Season::Unknown),
            MediaType::Anime,
        );
        let err = client.seasonal_media(query).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_media_by_id_not_found() {
        let mut transport = MockGraphQlTransport::new();
        transport
            .expect_execute()
            .withf(|req| req.operation_name == "MediaDetails" && req.variables["mediaId"] == 42)
            .times(1)
            .returning(|_| Ok(json!({ "Media": null })));

        let client = AniListClient::with_transport(Arc::new(transport));
        let err = client.media_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_threads_request_variables() {
        let mut transport = MockGraphQlTransport::new();
        transport
            .expect_execute()
            .withf(|req| {
                req.operation_name == "MediaThreads"
                    && req.variables["mediaId"] == 21
                    && req.variables["page"] == 2
            })
            .times(1)
            .returning(|_| {
                Ok(json!({ "Page": {
                    "pageInfo": { "total": 30, "perPage": 25, "currentPage": 2, "lastPage": 2, "hasNextPage": false },
                    "threads": [ { "id": 1, "title": "Episode 1", "createdAt": 1700000000, "user": { "id": 2, "name": "someone" } } ]
                } }))
            });

        let client = AniListClient::with_transport(Arc::new(transport));
        let page = client
            .media_threads(MediaThreadsQuery {
                media_id: 21,
                page: 2,
                per_page: 25,
            })
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].user.as_ref().unwrap().name, "someone");
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut transport = MockGraphQlTransport::new();
        transport
            .expect_execute()
            .returning(|_| Err(AppError::ApiError("Too Many Requests.".into())));

        let client = AniListClient::with_transport(Arc::new(transport));
        let err = client
            .popular_media(MediaListQuery::new(PaginationParams::first(10), MediaType::Manga))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Too Many Requests.");
    }
}
