pub mod infrastructure;

pub use infrastructure::{AniListClient, GraphQlTransport, HttpTransport};
