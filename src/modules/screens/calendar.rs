//! Airing calendar: one tab per day for the coming week
//!
//! Tab 0 is today. A day's bucket is fetched the first time its tab is
//! selected and kept afterwards unless a refresh is forced.

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use std::sync::Arc;

use super::state_holder::{StateHolder, StateWatcher};
use crate::modules::media::application::dto::AiringScheduleQuery;
use crate::modules::media::domain::MediaListItem;
use crate::modules::media::MediaRepository;
use crate::shared::{
    application::PaginationParams,
    config::AniListConfig,
    errors::{AppError, AppResult},
    utils::LogContext,
};

pub const DAYS_IN_WEEK: usize = 7;
pub const CALENDAR_PER_PAGE: u32 = 50;

/// The seven weekdays starting at `today`, in calendar order
pub fn sorted_weekdays(today: Weekday) -> [Weekday; DAYS_IN_WEEK] {
    let mut days = [today; DAYS_IN_WEEK];
    let mut day = today;
    for slot in days.iter_mut() {
        *slot = day;
        day = day.succ();
    }
    days
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarUiState {
    pub tabs: [Weekday; DAYS_IN_WEEK],
    pub selected: usize,
    /// `None` until the day has been loaded successfully, and again after a failed load
    pub buckets: [Option<Vec<MediaListItem>>; DAYS_IN_WEEK],
    /// Whether the selected day is loading
    pub is_loading: bool,
    pub error: Option<String>,
    pending: [bool; DAYS_IN_WEEK],
}

impl CalendarUiState {
    pub fn new(today: Weekday) -> Self {
        Self {
            tabs: sorted_weekdays(today),
            selected: 0,
            buckets: Default::default(),
            is_loading: false,
            error: None,
            pending: [false; DAYS_IN_WEEK],
        }
    }

    pub fn selected_day(&self) -> Weekday {
        self.tabs[self.selected]
    }

    pub fn selected_items(&self) -> Option<&[MediaListItem]> {
        self.buckets[self.selected].as_deref()
    }
}

pub struct CalendarViewModel {
    repository: Arc<MediaRepository>,
    timezone: Tz,
    today: NaiveDate,
    state: StateHolder<CalendarUiState>,
}

impl CalendarViewModel {
    pub fn new(repository: Arc<MediaRepository>, config: &AniListConfig) -> Self {
        let today = Utc::now().with_timezone(&config.timezone).date_naive();
        Self::with_today(repository, config.timezone, today)
    }

    pub fn with_today(repository: Arc<MediaRepository>, timezone: Tz, today: NaiveDate) -> Self {
        Self {
            repository,
            timezone,
            today,
            state: StateHolder::new(CalendarUiState::new(today.weekday())),
        }
    }

    pub fn state(&self) -> CalendarUiState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateWatcher<CalendarUiState> {
        self.state.subscribe()
    }

    /// Unix-seconds bounds of tab `index`: local midnight to the next local midnight
    pub fn day_window(&self, index: usize) -> AppResult<(i64, i64)> {
        let date = self.today + Duration::days(index as i64);
        let start = start_of_day(&self.timezone, date)?;
        let end = start_of_day(&self.timezone, date + Duration::days(1))?;
        Ok((start, end))
    }

    /// Select tab `index`, loading its bucket if needed or when `force` is set
    pub async fn select_day(&self, index: usize, force: bool) {
        if index >= DAYS_IN_WEEK {
            log::warn!("Calendar: tab {} out of range", index);
            return;
        }

        let mut fetch = false;
        self.state.replace(|s| {
            fetch = !s.pending[index] && (force || s.buckets[index].is_none());
            let mut pending = s.pending;
            pending[index] |= fetch;
            CalendarUiState {
                selected: index,
                is_loading: pending[index],
                error: if fetch { None } else { s.error.clone() },
                pending,
                ..s.clone()
            }
        });
        if !fetch {
            return;
        }

        let day = self.today + Duration::days(index as i64);
        LogContext::screen_transition("calendar", &format!("loading {}", day));
        let Some(result) = self.state.scoped(self.fetch_day(index)).await else {
            return;
        };

        self.state.replace(|s| {
            let mut next = s.clone();
            next.pending[index] = false;
            match result {
                Ok(items) => next.buckets[index] = Some(items),
                Err(e) => {
                    LogContext::screen_transition("calendar", "failure");
                    next.buckets[index] = None;
                    next.error = Some(e.message().to_string());
                }
            }
            next.is_loading = next.pending[next.selected];
            next
        });
    }

    async fn fetch_day(&self, index: usize) -> AppResult<Vec<MediaListItem>> {
        let (start, end) = self.day_window(index)?;
        let query =
            AiringScheduleQuery::window(PaginationParams::first(CALENDAR_PER_PAGE), start, end);

        let mut schedules = self.repository.recently_updated(query).await?.data;
        schedules.sort_by_key(|schedule| schedule.airing_at);
        Ok(schedules.into_iter().map(MediaListItem::from).collect())
    }

    pub fn dispose(&self) {
        self.state.dispose();
    }
}

/// First instant of `date` in `tz`. When midnight falls in a DST gap the
/// day starts at the first valid local time after it.
fn start_of_day(tz: &Tz, date: NaiveDate) -> AppResult<i64> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid date {}", date)))?;

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|dt| dt.timestamp())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("No local start of {} in {}", date, tz.name()))
        })
}
