pub mod anime_season;
pub mod season_enum;

pub use anime_season::AnimeSeason;
pub use season_enum::Season;
