//! Media aggregate: one anime or manga entry with its nested connections

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::modules::media::domain::value_objects::{FuzzyDate, MediaFormat, MediaStatus, MediaType};
use crate::modules::season::Season;

use super::community::Review;
use super::people::{CharacterEdge, StaffEdge, Studio};

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
    pub user_preferred: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    /// Average hex colour of the cover
    pub color: Option<String>,
}

impl CoverImage {
    /// Largest available rendition
    pub fn best(&self) -> Option<&str> {
        self.extra_large
            .as_deref()
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaTag {
    pub id: i32,
    pub name: String,
    pub rank: Option<i32>,
    pub is_spoiler: bool,
}

/// Upcoming episode of a releasing show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAiringEpisode {
    pub airing_at: i64,
    pub time_until_airing: i64,
    pub episode: i32,
}

/// Kind of link between two media entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaRelationType {
    Adaptation,
    Prequel,
    Sequel,
    Parent,
    SideStory,
    Character,
    Summary,
    Alternative,
    SpinOff,
    Other,
    Source,
    Compilation,
    Contains,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRelation {
    pub relation_type: MediaRelationType,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i32,
    pub rating: Option<i32>,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub score: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    /// User list status, e.g. CURRENT, PLANNING, COMPLETED
    pub status: String,
    pub amount: i32,
}

/// Aggregated user statistics behind the detail charts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaStats {
    pub score_distribution: Vec<ScoreDistribution>,
    pub status_distribution: Vec<StatusDistribution>,
}

impl MediaStats {
    pub fn total_scored(&self) -> i64 {
        self.score_distribution
            .iter()
            .map(|s| s.amount as i64)
            .sum()
    }

    pub fn total_listed(&self) -> i64 {
        self.status_distribution
            .iter()
            .map(|s| s.amount as i64)
            .sum()
    }
}

/// Catalog entry
///
/// Lists and schedules only fill the summary fields; the connections
/// (`characters`, `staff`, `relations`, ...) are populated by the detail query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Media {
    pub id: i32,
    pub id_mal: Option<i32>,
    pub title: Option<MediaTitle>,
    pub media_type: Option<MediaType>,
    pub format: Option<MediaFormat>,
    pub status: Option<MediaStatus>,
    pub description: Option<String>,
    pub start_date: Option<FuzzyDate>,
    pub end_date: Option<FuzzyDate>,
    pub season: Option<Season>,
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    pub duration: Option<i32>,
    pub chapters: Option<i32>,
    pub volumes: Option<i32>,
    pub country_of_origin: Option<String>,
    pub source: Option<String>,
    pub cover_image: Option<CoverImage>,
    pub banner_image: Option<String>,
    pub genres: Vec<String>,
    pub synonyms: Vec<String>,
    pub tags: Vec<MediaTag>,
    pub average_score: Option<i32>,
    pub mean_score: Option<i32>,
    pub popularity: Option<i32>,
    pub favourites: Option<i32>,
    pub is_adult: Option<bool>,
    pub is_favourite: bool,
    pub next_airing_episode: Option<NextAiringEpisode>,
    pub studios: Vec<Studio>,
    pub characters: Vec<CharacterEdge>,
    pub staff: Vec<StaffEdge>,
    pub relations: Vec<MediaRelation>,
    pub recommendations: Vec<Recommendation>,
    pub reviews: Vec<Review>,
    pub stats: Option<MediaStats>,
}

impl Media {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// First available title, in the order the catalog suggests
    pub fn display_title(&self) -> Option<&str> {
        let title = self.title.as_ref()?;
        title
            .user_preferred
            .as_deref()
            .or(title.romaji.as_deref())
            .or(title.english.as_deref())
            .or(title.native.as_deref())
    }

    /// Description with HTML markup removed
    pub fn plain_description(&self) -> Option<String> {
        self.description.as_deref().map(|raw| {
            let with_breaks = LINE_BREAK.replace_all(raw, "\n");
            HTML_TAG.replace_all(&with_breaks, "").trim().to_string()
        })
    }

    pub fn main_studios(&self) -> impl Iterator<Item = &Studio> {
        self.studios.iter().filter(|s| s.is_main)
    }

    /// Optimistic local toggle; the server mutation lives with the caller
    pub fn set_favourite(&mut self, is_favourite: bool) {
        if self.is_favourite != is_favourite {
            self.is_favourite = is_favourite;
            self.favourites = self.favourites.map(|count| {
                if is_favourite {
                    count + 1
                } else {
                    (count - 1).max(0)
                }
            });
        }
    }
}
