//! AniList wire shapes
//!
//! Mirrors the GraphQL schema's nullability: nearly every field and every list
//! element may be null. Conversion into domain records happens in the mapper.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::media::domain::{
    CharacterRole, MediaFormat, MediaRelationType, MediaStatus, MediaType,
};
use crate::modules::season::Season;

/// GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub operation_name: String,
    pub query: String,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(operation_name: &str, query: &str, variables: Value) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            query: query.to_string(),
            variables,
        }
    }
}

/// GraphQL response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    pub status: Option<i32>,
}

/// `data` of every paginated query
#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: Option<PageDto>,
}

/// `data` of the single media query
#[derive(Debug, Clone, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<MediaDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreTagCollectionData {
    #[serde(rename = "GenreCollection")]
    pub genre_collection: Option<Vec<Option<String>>>,
    #[serde(rename = "MediaTagCollection")]
    pub media_tag_collection: Option<Vec<Option<TagOptionDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOptionDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub is_adult: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub page_info: Option<PageInfoDto>,
    pub media: Option<Vec<Option<MediaDto>>>,
    pub airing_schedules: Option<Vec<Option<AiringScheduleDto>>>,
    pub threads: Option<Vec<Option<ThreadDto>>>,
    pub reviews: Option<Vec<Option<ReviewDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoDto {
    pub total: Option<i32>,
    pub per_page: Option<i32>,
    pub current_page: Option<i32>,
    pub last_page: Option<i32>,
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiringScheduleDto {
    pub id: Option<i32>,
    pub airing_at: Option<i64>,
    pub episode: Option<i32>,
    pub media: Option<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub id: Option<i32>,
    pub id_mal: Option<i32>,
    pub title: Option<TitleDto>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub format: Option<MediaFormat>,
    pub status: Option<MediaStatus>,
    pub description: Option<String>,
    pub start_date: Option<FuzzyDateDto>,
    pub end_date: Option<FuzzyDateDto>,
    pub season: Option<Season>,
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    pub duration: Option<i32>,
    pub chapters: Option<i32>,
    pub volumes: Option<i32>,
    pub country_of_origin: Option<String>,
    pub source: Option<String>,
    pub cover_image: Option<CoverImageDto>,
    pub banner_image: Option<String>,
    pub genres: Option<Vec<Option<String>>>,
    pub synonyms: Option<Vec<Option<String>>>,
    pub tags: Option<Vec<Option<TagDto>>>,
    pub average_score: Option<i32>,
    pub mean_score: Option<i32>,
    pub popularity: Option<i32>,
    pub favourites: Option<i32>,
    pub is_favourite: Option<bool>,
    pub is_adult: Option<bool>,
    pub next_airing_episode: Option<NextAiringEpisodeDto>,
    pub studios: Option<StudioConnectionDto>,
    pub characters: Option<CharacterConnectionDto>,
    pub staff: Option<StaffConnectionDto>,
    pub relations: Option<RelationConnectionDto>,
    pub recommendations: Option<RecommendationConnectionDto>,
    pub reviews: Option<ReviewConnectionDto>,
    pub stats: Option<StatsDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDto {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
    pub user_preferred: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FuzzyDateDto {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImageDto {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub rank: Option<i32>,
    pub is_media_spoiler: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAiringEpisodeDto {
    pub airing_at: Option<i64>,
    pub time_until_airing: Option<i64>,
    pub episode: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudioConnectionDto {
    pub edges: Option<Vec<Option<StudioEdgeDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioEdgeDto {
    pub is_main: Option<bool>,
    pub node: Option<StudioDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub is_animation_studio: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameDto {
    pub full: Option<String>,
    pub native: Option<String>,
    pub user_preferred: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageDto {
    pub medium: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterConnectionDto {
    pub edges: Option<Vec<Option<CharacterEdgeDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEdgeDto {
    pub role: Option<CharacterRole>,
    pub node: Option<CharacterDto>,
    pub voice_actors: Option<Vec<Option<StaffDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDto {
    pub id: Option<i32>,
    pub name: Option<NameDto>,
    pub image: Option<ImageDto>,
    pub favourites: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffConnectionDto {
    pub edges: Option<Vec<Option<StaffEdgeDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffEdgeDto {
    pub role: Option<String>,
    pub node: Option<StaffDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub id: Option<i32>,
    pub name: Option<NameDto>,
    pub image: Option<ImageDto>,
    #[serde(rename = "languageV2")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationConnectionDto {
    pub edges: Option<Vec<Option<RelationEdgeDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEdgeDto {
    pub relation_type: Option<MediaRelationType>,
    pub node: Option<MediaDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConnectionDto {
    pub nodes: Option<Vec<Option<RecommendationDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub id: Option<i32>,
    pub rating: Option<i32>,
    pub media_recommendation: Option<MediaDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConnectionDto {
    pub nodes: Option<Vec<Option<ReviewDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Option<i32>,
    pub summary: Option<String>,
    pub score: Option<i32>,
    pub rating: Option<i32>,
    pub rating_amount: Option<i32>,
    pub created_at: Option<i64>,
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDto {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub reply_count: Option<i32>,
    pub view_count: Option<i32>,
    pub replied_at: Option<i64>,
    pub created_at: Option<i64>,
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub avatar: Option<ImageDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub score_distribution: Option<Vec<Option<ScoreDistributionDto>>>,
    pub status_distribution: Option<Vec<Option<StatusDistributionDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreDistributionDto {
    pub score: Option<i32>,
    pub amount: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusDistributionDto {
    pub status: Option<String>,
    pub amount: Option<i32>,
}
