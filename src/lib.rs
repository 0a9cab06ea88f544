//! AniList catalog client: season computation, paginated catalog queries and
//! the view-state orchestrators built on them.

pub mod modules;
pub mod shared;

pub use modules::media::{MediaRepository, MediaService};
pub use modules::provider::AniListClient;
pub use modules::season::{AnimeSeason, Season};
pub use shared::{AniListConfig, AppError, AppResult};

use std::sync::Arc;

/// Repository backed by an HTTP AniList client built from `config`
pub fn connect(config: &AniListConfig) -> AppResult<Arc<MediaRepository>> {
    shared::utils::init_logger();
    let client = AniListClient::new(config)?;
    log::info!("Catalog client ready for {}", config.endpoint);
    Ok(Arc::new(MediaRepository::new(Arc::new(client))))
}
