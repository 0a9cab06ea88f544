pub mod media;
pub mod provider;
pub mod screens;
pub mod season;
