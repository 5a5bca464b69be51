//! Conversion of raw schedule records into display-ready calendar events.

use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::warn;

use crate::category::Classifier;
use crate::facility::FacilityConfig;
use crate::model::calendar_event::CalendarEvent;
use crate::model::event::RawEvent;
use crate::model::event_type::EventType;
use crate::model::team::RawTeam;
use crate::teams::{TeamMap, display_name};

/// Parse a local-time ISO-like timestamp. The source publishes a single
/// local offset, so there is no timezone conversion.
pub fn parse_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

fn lookup<'a>(teams: &'a TeamMap, id: Option<i64>) -> Option<&'a RawTeam> {
    id.and_then(|i| teams.get(&i))
        .and_then(|t| t.as_deref())
}

/// Normalize one raw event against the resolved team map.
///
/// Returns `None` (with a warning) when the record is missing its resource ID
/// or has unparsable timestamps; one bad record never aborts a range load.
pub fn normalize(
    raw: &RawEvent,
    teams: &TeamMap,
    config: &FacilityConfig,
    classifier: &Classifier,
) -> Option<CalendarEvent> {
    let attrs = &raw.attributes;

    let Some(resource_id) = attrs.resource_id else {
        warn!(event_id = %raw.id, "event has no resource id, skipping");
        return None;
    };
    let start = attrs.start.as_deref().and_then(parse_local);
    let end = attrs.end.as_deref().and_then(parse_local);
    let (Some(start), Some(mut end)) = (start, end) else {
        warn!(event_id = %raw.id, "event has unparsable timestamps, skipping");
        return None;
    };

    // Midnight edge case: the calendar grid treats an event ending exactly at
    // 00:00:00.000 as spanning into the next day as an all-day block. Pull it
    // back one millisecond so it stays within its intended day.
    if end.hour() == 0 && end.minute() == 0 && end.second() == 0 && end.nanosecond() == 0 {
        end = end - Duration::milliseconds(1);
    }

    let event_type = EventType::from_code(attrs.event_type_id.as_deref());
    let resource_name = config.resource_name(resource_id);

    let home_team_id = attrs.hteam_id.filter(|&id| id != 0);
    let visiting_team_id = attrs.vteam_id.filter(|&id| id != 0);
    let home_team = lookup(teams, home_team_id);
    let prefix = &config.team_name_prefix;

    let title = match event_type {
        EventType::Game => match (home_team_id, visiting_team_id) {
            (Some(_), Some(_)) => {
                let visiting = lookup(teams, visiting_team_id);
                format!(
                    "({}) {} @ {}",
                    resource_name,
                    display_name(visiting, prefix),
                    display_name(home_team, prefix)
                )
            }
            (Some(_), None) => format!("{} - Game", display_name(home_team, prefix)),
            _ => "Game".to_string(),
        },
        EventType::Session => match home_team_id {
            Some(_) => display_name(home_team, prefix),
            None => "Session".to_string(),
        },
        _ => match home_team_id {
            Some(_) => display_name(home_team, prefix),
            None => "Event".to_string(),
        },
    };

    let category = classifier.classify(
        event_type,
        visiting_team_id.is_some(),
        home_team.and_then(|t| t.raw_name()),
    );

    Some(CalendarEvent {
        id: raw.id.clone(),
        title,
        start,
        end,
        resource_id,
        resource_name,
        event_type,
        home_team_id,
        visiting_team_id,
        description: attrs.best_description.clone(),
        category,
        variants: Vec::new(),
        is_deduplicated: false,
    })
}
