pub mod domain;

pub use domain::{AnimeSeason, Season};
