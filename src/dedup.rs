//! Slot deduplication.
//!
//! Sub-sessions booked separately (e.g. per-level drop-ins) show up upstream
//! as several records on the exact same time slot and rink. Those collapse
//! into one merged event titled by the common prefix of the member team
//! names, with every original retained as a variant.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::model::calendar_event::CalendarEvent;
use crate::teams::{TeamMap, resolved_name};

type SlotKey = (NaiveDateTime, NaiveDateTime, i64);

/// Collapse events sharing an identical `(start, end, resource)` slot.
/// Group order and member order both follow first appearance in the input,
/// so repeated runs over identical input produce identical output.
pub fn deduplicate(events: Vec<CalendarEvent>, teams: &TeamMap) -> Vec<CalendarEvent> {
    let mut order: Vec<SlotKey> = Vec::new();
    let mut groups: HashMap<SlotKey, Vec<CalendarEvent>> = HashMap::new();

    for event in events {
        let key = (event.start, event.end, event.resource_id);
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(event);
    }

    let mut result = Vec::with_capacity(order.len());
    for key in order {
        let Some(mut members) = groups.remove(&key) else {
            continue;
        };
        if members.len() == 1 {
            result.push(members.remove(0));
        } else {
            result.push(merge_group(key, members, teams));
        }
    }
    result
}

fn merge_group(key: SlotKey, members: Vec<CalendarEvent>, teams: &TeamMap) -> CalendarEvent {
    // Only members whose home team actually resolved contribute a name; the
    // member itself is still kept as a variant either way.
    let names: Vec<String> = members
        .iter()
        .filter_map(|e| {
            e.home_team_id
                .and_then(|id| teams.get(&id))
                .and_then(|t| t.as_deref())
                .map(resolved_name)
        })
        .collect();

    let base_name = common_prefix(&names);
    let others = members.len() - 1;
    let title = format!(
        "{} (+{} other{})",
        base_name,
        others,
        if others != 1 { "s" } else { "" }
    );

    let first = &members[0];
    // Merged IDs derive from the slot key, not member IDs, so repeated runs
    // on identical input synthesize the same ID.
    let id = format!(
        "dedup-{}-{}-{}",
        key.0.and_utc().timestamp_millis(),
        key.1.and_utc().timestamp_millis(),
        key.2
    );

    CalendarEvent {
        id,
        title,
        start: first.start,
        end: first.end,
        resource_id: first.resource_id,
        resource_name: first.resource_name.clone(),
        event_type: first.event_type,
        home_team_id: first.home_team_id,
        visiting_team_id: first.visiting_team_id,
        description: first.description.clone(),
        category: first.category,
        is_deduplicated: true,
        variants: members,
    }
}

/// Longest common string-prefix of `names`, right-trimmed of a trailing
/// separator (hyphen or dash variants) and whitespace. Degenerate cases keep
/// the historical behavior: no names at all yields `"Event"`, a single name
/// is returned untouched, and a vanishing prefix falls back to the first
/// name rather than inventing a better heuristic.
pub fn common_prefix(names: &[String]) -> String {
    let Some(first) = names.first() else {
        return "Event".to_string();
    };
    if names.len() == 1 {
        return first.clone();
    }

    let mut prefix: &str = first;
    for name in &names[1..] {
        while !name.starts_with(prefix) {
            let shorter = prefix
                .char_indices()
                .next_back()
                .map(|(i, _)| &prefix[..i])
                .unwrap_or("");
            prefix = shorter;
            if prefix.is_empty() {
                return first.clone();
            }
        }
    }

    trim_trailing_separator(prefix).to_string()
}

fn trim_trailing_separator(s: &str) -> &str {
    let trimmed = s.trim_end();
    let trimmed = trimmed.strip_suffix(['-', '–', '—']).unwrap_or(trimmed);
    trimmed.trim()
}
