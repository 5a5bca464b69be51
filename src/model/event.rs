use serde::{Deserialize, Serialize};

/// One schedule record as published in a per-day event file.
///
/// Upstream documents carry far more attributes than we read; anything not
/// declared here is ignored by serde so trimmed/partial files still parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub attributes: EventAttributes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventAttributes {
    #[serde(default)]
    pub resource_id: Option<i64>,
    /// One-letter event type code ("g", "k", "L", "b").
    #[serde(default)]
    pub event_type_id: Option<String>,
    /// Local-time ISO-like string. The source publishes a single local
    /// offset, so timestamps are parsed naively with no timezone conversion.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub hteam_id: Option<i64>,
    #[serde(default)]
    pub vteam_id: Option<i64>,
    #[serde(default)]
    pub publish: Option<bool>,
    #[serde(default)]
    pub best_description: Option<String>,
}
