pub mod anilist;

// Re-export commonly used types
pub use anilist::{AniListClient, GraphQlTransport, HttpTransport};
