use chrono::NaiveDateTime;

use crate::category::Category;
use crate::model::event_type::EventType;

/// A display-ready event derived from one raw record (or, after
/// deduplication, from several records sharing the same time slot and rink).
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Source record ID, or `dedup-<key>` for merged slot groups.
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    /// Always strictly after `start`; events ending exactly at midnight are
    /// pulled back one millisecond so they stay within their day.
    pub end: NaiveDateTime,
    pub resource_id: i64,
    pub resource_name: String,
    pub event_type: EventType,
    pub home_team_id: Option<i64>,
    pub visiting_team_id: Option<i64>,
    pub description: Option<String>,
    pub category: Category,
    /// All original events folded into this one; empty unless this is a
    /// deduplication result, in which case it holds every member (>= 2).
    pub variants: Vec<CalendarEvent>,
    pub is_deduplicated: bool,
}
