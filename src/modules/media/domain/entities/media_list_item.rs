use serde::{Deserialize, Serialize};

use super::{airing_schedule::AiringSchedule, media::Media};

/// Element of a homogeneous list fed by either a media query or a schedule query
///
/// The two shapes stay distinct; consumers match on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum MediaListItem {
    MediaEntry(Media),
    ScheduleEntry(AiringSchedule),
}

impl MediaListItem {
    /// Media shown for this row
    pub fn media(&self) -> &Media {
        match self {
            MediaListItem::MediaEntry(media) => media,
            MediaListItem::ScheduleEntry(schedule) => &schedule.media,
        }
    }

    pub fn media_id(&self) -> i32 {
        self.media().id
    }

    /// Episode label for schedule rows
    pub fn episode(&self) -> Option<i32> {
        match self {
            MediaListItem::MediaEntry(_) => None,
            MediaListItem::ScheduleEntry(schedule) => Some(schedule.episode),
        }
    }
}

impl From<Media> for MediaListItem {
    fn from(media: Media) -> Self {
        MediaListItem::MediaEntry(media)
    }
}

impl From<AiringSchedule> for MediaListItem {
    fn from(schedule: AiringSchedule) -> Self {
        MediaListItem::ScheduleEntry(schedule)
    }
}
