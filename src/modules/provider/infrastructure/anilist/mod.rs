//! AniList GraphQL adapter
//!
//! `AniListClient` is the production `MediaService`: queries, wire shapes and
//! mapping live beside it, the HTTP call sits behind `GraphQlTransport`.

pub mod client;
pub mod dto;
pub mod mapper;
pub mod queries;
pub mod transport;

pub use client::AniListClient;
pub use mapper::AniListMapper;
pub use transport::{GraphQlTransport, HttpTransport};
