//! User-generated content attached to media: reviews and forum threads

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub summary: Option<String>,
    /// Reviewer's score, 0-100
    pub score: Option<i32>,
    /// Upvotes
    pub rating: Option<i32>,
    /// Total votes
    pub rating_amount: Option<i32>,
    pub created_at: Option<i64>,
    pub user: Option<User>,
}

impl Review {
    /// Share of positive votes, when anyone voted
    pub fn approval_ratio(&self) -> Option<f64> {
        match (self.rating, self.rating_amount) {
            (Some(up), Some(total)) if total > 0 => Some(up as f64 / total as f64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: i32,
    pub title: Option<String>,
    pub reply_count: Option<i32>,
    pub view_count: Option<i32>,
    /// Unix seconds of the latest reply
    pub replied_at: Option<i64>,
    pub created_at: i64,
    pub user: Option<User>,
}

impl Thread {
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created_at, 0).single()
    }

    /// Latest activity: last reply, or creation when nobody replied
    pub fn last_activity(&self) -> i64 {
        self.replied_at.unwrap_or(self.created_at)
    }
}

/// Filter options offered by the search screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreTagCollection {
    pub genres: Vec<String>,
    pub tags: Vec<TagOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOption {
    pub name: String,
    pub category: Option<String>,
    pub is_adult: bool,
}
