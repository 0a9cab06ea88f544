use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::media::Media;

/// One episode's broadcast slot, with the media it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiringSchedule {
    pub id: i32,
    /// Unix seconds
    pub airing_at: i64,
    pub episode: i32,
    pub media: Media,
}

impl AiringSchedule {
    pub fn airing_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.airing_at, 0).single()
    }

    pub fn has_aired(&self, now: DateTime<Utc>) -> bool {
        self.airing_at <= now.timestamp()
    }
}
