pub mod application;
pub mod domain;

// Re-export commonly used types
pub use application::{MediaRepository, MediaService};
pub use domain::{AiringSchedule, Media, MediaListItem};
