// Shared Kernel
// Cross-cutting pieces every bounded context leans on

pub mod application; // Pagination model shared by all catalog queries
pub mod config; // Endpoint, page sizes and timezone
pub mod errors; // Shared error types
pub mod utils; // Logging helpers

pub use config::AniListConfig;
pub use errors::{AppError, AppResult};
