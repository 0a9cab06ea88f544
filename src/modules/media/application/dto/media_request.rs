//! Request parameters for catalog queries
//!
//! One struct per query; every paginated request carries a 1-based `page` and
//! `per_page`.

use serde::{Deserialize, Serialize};

use crate::modules::media::domain::{MediaFormat, MediaSort, MediaStatus, MediaType};
use crate::modules::season::AnimeSeason;
use crate::shared::application::PaginationParams;

/// Media released in a given season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalMediaQuery {
    pub page: u32,
    pub per_page: u32,
    pub season: AnimeSeason,
    pub media_type: MediaType,
    pub sort: Vec<MediaSort>,
}

impl SeasonalMediaQuery {
    pub fn new(pagination: PaginationParams, season: AnimeSeason, media_type: MediaType) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            season,
            media_type,
            sort: vec![MediaSort::Popularity],
        }
    }
}

/// Trending or popular lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaListQuery {
    pub page: u32,
    pub per_page: u32,
    pub media_type: MediaType,
}

impl MediaListQuery {
    pub fn new(pagination: PaginationParams, media_type: MediaType) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            media_type,
        }
    }
}

/// Airing schedules within an optional unix-seconds window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiringScheduleQuery {
    pub page: u32,
    pub per_page: u32,
    /// Exclusive lower bound
    pub airing_at_greater: Option<i64>,
    /// Exclusive upper bound
    pub airing_at_lesser: Option<i64>,
}

impl AiringScheduleQuery {
    /// Episodes that already aired, newest first
    pub fn aired_before(pagination: PaginationParams, now: i64) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            airing_at_greater: None,
            airing_at_lesser: Some(now),
        }
    }

    pub fn window(pagination: PaginationParams, start: i64, end: i64) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            airing_at_greater: Some(start - 1),
            airing_at_lesser: Some(end),
        }
    }
}

/// User-chosen search filters; empty collections mean "no filter"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub media_type: Option<MediaType>,
    pub format: Vec<MediaFormat>,
    pub status: Option<MediaStatus>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    /// ISO 3166-1 alpha-2, e.g. JP, KR
    pub country_of_origin: Option<String>,
    pub season: Option<AnimeSeason>,
    pub sort: Vec<MediaSort>,
}

impl SearchFilters {
    pub fn text(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Default::default()
        }
    }

    /// Search text, `None` when blank
    pub fn normalized_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Explicit sort, or relevance when searching by text and popularity otherwise
    pub fn effective_sort(&self) -> Vec<MediaSort> {
        if !self.sort.is_empty() {
            self.sort.clone()
        } else if self.normalized_search().is_some() {
            vec![MediaSort::SearchMatch]
        } else {
            vec![MediaSort::Popularity]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMediaQuery {
    pub page: u32,
    pub per_page: u32,
    pub filters: SearchFilters,
}

impl SearchMediaQuery {
    pub fn new(pagination: PaginationParams, filters: SearchFilters) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            filters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaThreadsQuery {
    pub media_id: i32,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReviewsQuery {
    pub media_id: i32,
    pub page: u32,
    pub per_page: u32,
}
