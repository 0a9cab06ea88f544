//! Catalog enums used both as request variables and response fields
//!
//! Unrecognised values coming back from the server deserialize to `Unknown`
//! instead of failing the whole page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Anime,
    Manga,
    #[serde(other)]
    Unknown,
}

impl MediaType {
    pub fn as_graphql(&self) -> Option<&'static str> {
        match self {
            Self::Anime => Some("ANIME"),
            Self::Manga => Some("MANGA"),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Ova,
    Ona,
    Special,
    Music,
    Manga,
    Novel,
    OneShot,
    #[serde(other)]
    Unknown,
}

impl MediaFormat {
    pub fn as_graphql(&self) -> Option<&'static str> {
        match self {
            Self::Tv => Some("TV"),
            Self::TvShort => Some("TV_SHORT"),
            Self::Movie => Some("MOVIE"),
            Self::Ova => Some("OVA"),
            Self::Ona => Some("ONA"),
            Self::Special => Some("SPECIAL"),
            Self::Music => Some("MUSIC"),
            Self::Manga => Some("MANGA"),
            Self::Novel => Some("NOVEL"),
            Self::OneShot => Some("ONE_SHOT"),
            Self::Unknown => None,
        }
    }

    /// Formats that only exist for the given media type
    pub fn for_media_type(media_type: MediaType) -> &'static [MediaFormat] {
        match media_type {
            MediaType::Anime => &[
                Self::Tv,
                Self::TvShort,
                Self::Movie,
                Self::Ova,
                Self::Ona,
                Self::Special,
                Self::Music,
            ],
            MediaType::Manga => &[Self::Manga, Self::Novel, Self::OneShot],
            MediaType::Unknown => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
    #[serde(other)]
    Unknown,
}

impl MediaStatus {
    pub fn as_graphql(&self) -> Option<&'static str> {
        match self {
            Self::Finished => Some("FINISHED"),
            Self::Releasing => Some("RELEASING"),
            Self::NotYetReleased => Some("NOT_YET_RELEASED"),
            Self::Cancelled => Some("CANCELLED"),
            Self::Hiatus => Some("HIATUS"),
            Self::Unknown => None,
        }
    }
}

/// Sort orders offered to users; always sent descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSort {
    Score,
    Popularity,
    Trending,
    Favourites,
    /// Relevance to the search text
    SearchMatch,
    StartDate,
}

impl MediaSort {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            Self::Score => "SCORE_DESC",
            Self::Popularity => "POPULARITY_DESC",
            Self::Trending => "TRENDING_DESC",
            Self::Favourites => "FAVOURITES_DESC",
            Self::SearchMatch => "SEARCH_MATCH",
            Self::StartDate => "START_DATE_DESC",
        }
    }

    pub fn to_graphql_list(sort: &[MediaSort]) -> Vec<&'static str> {
        sort.iter().map(MediaSort::as_graphql).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(MediaFormat::TvShort.as_graphql(), Some("TV_SHORT"));
        assert_eq!(MediaFormat::OneShot.as_graphql(), Some("ONE_SHOT"));
        assert_eq!(MediaStatus::NotYetReleased.as_graphql(), Some("NOT_YET_RELEASED"));
        assert_eq!(
            MediaSort::to_graphql_list(&[MediaSort::Popularity, MediaSort::Score]),
            vec!["POPULARITY_DESC", "SCORE_DESC"]
        );
    }

    #[test]
    fn test_serde_matches_graphql() {
        let format: MediaFormat = serde_json::from_str("\"TV_SHORT\"").unwrap();
        assert_eq!(format, MediaFormat::TvShort);
        let status: MediaStatus = serde_json::from_str("\"NOT_YET_RELEASED\"").unwrap();
        assert_eq!(status, MediaStatus::NotYetReleased);
        let unknown: MediaFormat = serde_json::from_str("\"HOLOGRAM\"").unwrap();
        assert_eq!(unknown, MediaFormat::Unknown);
    }

    #[test]
    fn test_formats_by_type() {
        assert!(MediaFormat::for_media_type(MediaType::Manga).contains(&MediaFormat::Novel));
        assert!(!MediaFormat::for_media_type(MediaType::Anime).contains(&MediaFormat::Novel));
    }
}
