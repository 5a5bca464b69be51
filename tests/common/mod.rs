#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use rink_calendar::fetch::{Fetch, FetchError};

/// In-memory document source for loader tests. Counts every fetch per path so
/// tests can assert memoization behavior.
pub struct MemoryFetcher {
    files: HashMap<String, String>,
    counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl MemoryFetcher {
    pub fn new(files: HashMap<String, String>) -> Self {
        MemoryFetcher {
            files,
            counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Shared handle to the per-path fetch counts; clone before handing the
    /// fetcher to a loader.
    pub fn counts(&self) -> Arc<Mutex<HashMap<String, usize>>> {
        Arc::clone(&self.counts)
    }
}

impl Fetch for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        {
            let mut counts = self.counts.lock().unwrap();
            *counts.entry(path.to_string()).or_insert(0) += 1;
        }
        self.files
            .get(path)
            .cloned()
            .ok_or(FetchError::NotFound)
    }
}

/// Fetcher whose every call panics; used to exercise the aggregate-failure
/// path of a range load.
pub struct PanickingFetcher;

impl Fetch for PanickingFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        panic!("unexpected fetch of {}", path);
    }
}

pub fn event_json(
    id: &str,
    resource_id: i64,
    event_type: &str,
    start: &str,
    end: &str,
    hteam_id: Option<i64>,
    vteam_id: Option<i64>,
) -> Value {
    json!({
        "type": "events",
        "id": id,
        "attributes": {
            "resource_id": resource_id,
            "event_type_id": event_type,
            "start": start,
            "end": end,
            "hteam_id": hteam_id,
            "vteam_id": vteam_id,
            "publish": true,
            "best_description": null,
        }
    })
}

pub fn team_json(id: i64, name: &str) -> Value {
    json!({
        "type": "teams",
        "id": id.to_string(),
        "attributes": { "name": name }
    })
}

pub fn day_file(events: &[Value]) -> String {
    serde_json::to_string(&Value::Array(events.to_vec())).unwrap()
}
