//! Client configuration
//!
//! Defaults target the public AniList endpoint. Every value can be overridden
//! from the environment (or a `.env` file) so hosts never need to touch code.

use chrono_tz::Tz;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PER_PAGE: u32 = 25;
pub const DEFAULT_HOME_PER_PAGE: u32 = 10;

const ENV_ENDPOINT: &str = "ANILIST_ENDPOINT";
const ENV_TIMEOUT: &str = "ANILIST_TIMEOUT_SECS";
const ENV_PER_PAGE: &str = "ANILIST_PER_PAGE";
const ENV_TIMEZONE: &str = "ANILIST_TIMEZONE";

#[derive(Debug, Clone)]
pub struct AniListConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Page size for infinite-scroll lists
    pub per_page: u32,
    /// Page size for each home screen row
    pub home_per_page: u32,
    /// Timezone used to cut calendar days
    pub timezone: Tz,
}

impl Default for AniListConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("aniview/{}", env!("CARGO_PKG_VERSION")),
            per_page: DEFAULT_PER_PAGE,
            home_per_page: DEFAULT_HOME_PER_PAGE,
            timezone: Tz::UTC,
        }
    }
}

impl AniListConfig {
    /// Build the configuration from environment variables, loading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            let endpoint = endpoint.trim();
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(AppError::ConfigurationError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    ENV_ENDPOINT, endpoint
                )));
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            config.timeout = Duration::from_secs(timeout.trim().parse::<u64>()?);
        }

        if let Some(per_page) = lookup(ENV_PER_PAGE) {
            let per_page = per_page.trim().parse::<u32>()?;
            // AniList caps perPage at 50
            if per_page == 0 || per_page > 50 {
                return Err(AppError::ConfigurationError(format!(
                    "{} must be between 1 and 50, got {}",
                    ENV_PER_PAGE, per_page
                )));
            }
            config.per_page = per_page;
        }

        if let Some(timezone) = lookup(ENV_TIMEZONE) {
            config.timezone = timezone.trim().parse::<Tz>().map_err(|e| {
                AppError::ConfigurationError(format!("Invalid timezone '{}': {}", timezone, e))
            })?;
        }

        log::debug!(
            "Config: endpoint={} timeout={:?} per_page={} timezone={}",
            config.endpoint,
            config.timeout,
            config.per_page,
            config.timezone.name()
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = AniListConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.home_per_page, DEFAULT_HOME_PER_PAGE);
        assert_eq!(config.timezone, Tz::UTC);
        assert!(config.user_agent.starts_with("aniview/"));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AniListConfig::from_lookup(lookup(&[
            ("ANILIST_ENDPOINT", "http://localhost:4000/graphql"),
            ("ANILIST_TIMEOUT_SECS", "5"),
            ("ANILIST_PER_PAGE", "50"),
            ("ANILIST_TIMEZONE", "Asia/Tokyo"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.per_page, 50);
        assert_eq!(config.timezone, chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_endpoint = AniListConfig::from_lookup(lookup(&[("ANILIST_ENDPOINT", "ftp://x")]));
        assert!(matches!(bad_endpoint, Err(AppError::ConfigurationError(_))));

        let bad_page = AniListConfig::from_lookup(lookup(&[("ANILIST_PER_PAGE", "100")]));
        assert!(matches!(bad_page, Err(AppError::ConfigurationError(_))));

        let bad_tz = AniListConfig::from_lookup(lookup(&[("ANILIST_TIMEZONE", "Mars/Base")]));
        assert!(matches!(bad_tz, Err(AppError::ConfigurationError(_))));
    }
}
