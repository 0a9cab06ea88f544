use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonName {
    pub full: Option<String>,
    pub native: Option<String>,
    pub user_preferred: Option<String>,
}

impl PersonName {
    pub fn display(&self) -> Option<&str> {
        self.user_preferred
            .as_deref()
            .or(self.full.as_deref())
            .or(self.native.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub name: Option<PersonName>,
    pub image: Option<String>,
    pub favourites: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterRole {
    Main,
    Supporting,
    Background,
    #[serde(other)]
    Unknown,
}

/// Character as cast in a particular media, with its voice actors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEdge {
    pub role: Option<CharacterRole>,
    pub character: Character,
    pub voice_actors: Vec<Staff>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i32,
    pub name: Option<PersonName>,
    pub image: Option<String>,
    pub language: Option<String>,
}

/// Staff member with the role they held on a media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffEdge {
    pub role: Option<String>,
    pub staff: Staff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    pub id: i32,
    pub name: String,
    pub is_main: bool,
    pub is_animation_studio: bool,
}
