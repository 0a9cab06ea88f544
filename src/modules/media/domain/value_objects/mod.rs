pub mod fuzzy_date;
pub mod media_enums;

pub use fuzzy_date::FuzzyDate;
pub use media_enums::{MediaFormat, MediaSort, MediaStatus, MediaType};
