mod common;

use std::collections::HashMap;
use std::sync::Arc;

use common::{MemoryFetcher, team_json};
use rink_calendar::model::team::RawTeam;
use rink_calendar::teams::{TeamDirectory, display_name, resolved_name};

fn team_from(value: serde_json::Value) -> RawTeam {
    serde_json::from_value(value).unwrap()
}

#[test]
fn display_name_strips_the_organizational_prefix() {
    let team = team_from(team_json(100, "OIC - Sharks A"));
    assert_eq!(display_name(Some(&team), "OIC - "), "Sharks A");
    // Names without the prefix pass through untouched.
    let plain = team_from(team_json(101, "Sharks B"));
    assert_eq!(display_name(Some(&plain), "OIC - "), "Sharks B");
}

#[test]
fn display_name_falls_back_through_short_name_and_id() {
    assert_eq!(display_name(None, "OIC - "), "Unknown Team");

    let short_only = team_from(serde_json::json!({
        "type": "teams",
        "id": "42",
        "attributes": { "name": "", "short_name": "Sharks" }
    }));
    assert_eq!(display_name(Some(&short_only), "OIC - "), "Sharks");

    let nameless = team_from(serde_json::json!({
        "type": "teams",
        "id": "42",
        "attributes": {}
    }));
    assert_eq!(display_name(Some(&nameless), "OIC - "), "Team 42");
}

#[test]
fn resolved_name_keeps_the_prefix() {
    let team = team_from(team_json(100, "OIC - Sharks A"));
    assert_eq!(resolved_name(&team), "OIC - Sharks A");
}

#[tokio::test]
async fn resolves_a_batch_and_caches_misses() {
    let mut files = HashMap::new();
    files.insert(
        "teams/100.json".to_string(),
        team_json(100, "OIC - Sharks A").to_string(),
    );
    let fetcher = MemoryFetcher::new(files);
    let counts = fetcher.counts();
    let directory = TeamDirectory::new(Arc::new(fetcher));

    let teams = directory.resolve_batch([100, 200]).await;
    assert_eq!(teams.len(), 2);
    assert!(teams.get(&100).unwrap().is_some());
    // Looked up and missing: present in the map as an explicit absence.
    assert!(teams.get(&200).unwrap().is_none());

    // Misses are memoized just like hits.
    assert!(directory.resolve(200).await.is_none());
    let counts = counts.lock().unwrap();
    assert_eq!(counts.get("teams/100.json"), Some(&1));
    assert_eq!(counts.get("teams/200.json"), Some(&1));
}

#[tokio::test]
async fn malformed_team_document_resolves_as_missing() {
    let mut files = HashMap::new();
    files.insert("teams/100.json".to_string(), "{broken".to_string());
    let directory = TeamDirectory::new(Arc::new(MemoryFetcher::new(files)));
    assert!(directory.resolve(100).await.is_none());
}
