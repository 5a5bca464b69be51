use serde::{Deserialize, Serialize};

/// Broad event kind derived from the upstream one-letter type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Game,
    Session,
    Lesson,
    Other,
}

impl EventType {
    /// Map an upstream type code ("g"/"k"/"L") to a kind. Codes are
    /// case-sensitive; anything unrecognized is `Other`.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("g") => EventType::Game,
            Some("k") => EventType::Session,
            Some("L") => EventType::Lesson,
            _ => EventType::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Game => "Game",
            EventType::Session => "Session",
            EventType::Lesson => "Lesson",
            EventType::Other => "Event",
        }
    }
}
