pub mod airing_schedule;
pub mod community;
pub mod media;
pub mod media_list_item;
pub mod people;

pub use airing_schedule::AiringSchedule;
pub use community::{GenreTagCollection, Review, TagOption, Thread, User};
pub use media::{
    CoverImage, Media, MediaRelation, MediaRelationType, MediaStats, MediaTag, MediaTitle,
    NextAiringEpisode, Recommendation, ScoreDistribution, StatusDistribution,
};
pub use media_list_item::MediaListItem;
pub use people::{Character, CharacterEdge, CharacterRole, PersonName, Staff, StaffEdge, Studio};
