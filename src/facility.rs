//! Fixed facility configuration: rink IDs and names, event type codes, and
//! team-list housekeeping. Kept as data so the pipeline carries no hardcoded
//! knowledge of one specific rink.

use std::collections::HashMap;

/// Upstream one-letter event type codes.
pub const EVENT_TYPE_GAME: &str = "g";
pub const EVENT_TYPE_SESSION: &str = "k";
pub const EVENT_TYPE_LESSON: &str = "L";
pub const EVENT_TYPE_BLOCK: &str = "b";

#[derive(Debug, Clone)]
pub struct FacilityConfig {
    /// Resource IDs shown on the calendar (the two bookable ice surfaces).
    pub calendar_rink_ids: Vec<i64>,
    /// Resource ID -> display name.
    pub resource_names: HashMap<i64, String>,
    /// Event type code dropped entirely (facility hold blocks).
    pub blocked_event_type: String,
    /// Home-team IDs excluded from the calendar.
    pub excluded_team_ids: Vec<i64>,
    /// Organizational prefix stripped from team names for display.
    pub team_name_prefix: String,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        // NHL rink (200x85), Olympic rink (200x100), plus two non-calendar
        // resources that still need display names.
        let resource_names = HashMap::from([
            (24, "NHL".to_string()),
            (25, "OLY".to_string()),
            (29, "Unknown".to_string()),
            (62, "Training Area".to_string()),
        ]);
        FacilityConfig {
            calendar_rink_ids: vec![24, 25],
            resource_names,
            blocked_event_type: EVENT_TYPE_BLOCK.to_string(),
            excluded_team_ids: vec![8644, 9192],
            team_name_prefix: "OIC - ".to_string(),
        }
    }
}

impl FacilityConfig {
    /// Display name for a resource; unknown IDs render as `Resource <id>`.
    pub fn resource_name(&self, id: i64) -> String {
        self.resource_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Resource {}", id))
    }

    pub fn is_calendar_rink(&self, id: i64) -> bool {
        self.calendar_rink_ids.contains(&id)
    }

    pub fn is_excluded_team(&self, id: i64) -> bool {
        self.excluded_team_ids.contains(&id)
    }
}
