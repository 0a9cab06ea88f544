//! Catalog season labelled by year

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::season_enum::Season;

/// A season of a given year, e.g. Spring 2024
///
/// The catalog labels a winter season with the year of its January, so the
/// December that opens it already belongs to the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimeSeason {
    pub year: i32,
    pub season: Season,
}

impl AnimeSeason {
    pub fn new(year: i32, season: Season) -> Self {
        Self { year, season }
    }

    /// Season a calendar date falls into
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        let month = date.month();
        let year = if month == 12 {
            date.year() + 1
        } else {
            date.year()
        };

        Self {
            year,
            season: Season::from_month(month),
        }
    }

    /// Season of the local wall clock
    pub fn now() -> Self {
        Self::from_date(&Local::now().date_naive())
    }

    /// Season immediately following this one
    pub fn next(&self) -> Self {
        let year = if self.season == Season::Fall {
            self.year + 1
        } else {
            self.year
        };

        Self {
            year,
            season: self.season.next(),
        }
    }
}

impl fmt::Display for AnimeSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}
