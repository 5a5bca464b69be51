//! Team lookup with process-lifetime memoization.
//!
//! Teams live in per-ID documents published next to the event files. A team
//! that cannot be fetched (missing file, bad JSON, transport error) is cached
//! as absent and treated exactly like a team with no name, never as an error.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::warn;

use crate::cache::AsyncCache;
use crate::fetch::{Fetch, FetchError};
use crate::model::team::RawTeam;

/// Resolution results keyed by team ID. `None` means "looked up, not found",
/// which is distinct from a key that was never requested.
pub type TeamMap = HashMap<i64, Option<Arc<RawTeam>>>;

pub struct TeamDirectory<F> {
    fetcher: Arc<F>,
    cache: Arc<AsyncCache<i64, Option<Arc<RawTeam>>>>,
}

impl<F> Clone for TeamDirectory<F> {
    fn clone(&self) -> Self {
        TeamDirectory {
            fetcher: Arc::clone(&self.fetcher),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<F: Fetch> TeamDirectory<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        TeamDirectory {
            fetcher,
            cache: Arc::new(AsyncCache::new()),
        }
    }

    /// Resolve one team by ID. Memoized for the process lifetime; concurrent
    /// calls for the same ID share one underlying fetch.
    pub async fn resolve(&self, id: i64) -> Option<Arc<RawTeam>> {
        self.cache
            .get_or_load(id, || async move {
                let path = format!("teams/{}.json", id);
                match self.fetcher.fetch(&path).await {
                    Ok(body) => match serde_json::from_str::<RawTeam>(&body) {
                        Ok(team) => Some(Arc::new(team)),
                        Err(e) => {
                            warn!(team_id = id, error = %e, "failed to parse team document");
                            None
                        }
                    },
                    Err(FetchError::NotFound) => {
                        warn!(team_id = id, "team not in cache");
                        None
                    }
                    Err(e) => {
                        warn!(team_id = id, error = %e, "failed to fetch team");
                        None
                    }
                }
            })
            .await
    }

    /// Resolve a batch of distinct IDs concurrently into a [`TeamMap`].
    pub async fn resolve_batch(&self, ids: impl IntoIterator<Item = i64>) -> TeamMap {
        let mut tasks = JoinSet::new();
        for id in ids {
            let directory = self.clone();
            tasks.spawn(async move { (id, directory.resolve(id).await) });
        }

        let mut teams = TeamMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, team)) => {
                    teams.insert(id, team);
                }
                Err(e) => {
                    warn!(error = %e, "team resolution task failed");
                }
            }
        }
        teams
    }
}

/// Display name for a team, with the organizational `strip_prefix` removed.
/// Unresolved teams render as `"Unknown Team"`; records with no usable name
/// fall back to `"Team <id>"`.
pub fn display_name(team: Option<&RawTeam>, strip_prefix: &str) -> String {
    let Some(team) = team else {
        return "Unknown Team".to_string();
    };
    let name = resolved_name(team);
    if !strip_prefix.is_empty() {
        if let Some(stripped) = name.strip_prefix(strip_prefix) {
            return stripped.to_string();
        }
    }
    name
}

/// Resolved name with no prefix stripping, preferring `name`, then
/// `short_name`, then a synthesized `"Team <id>"`.
pub fn resolved_name(team: &RawTeam) -> String {
    team.raw_name()
        .map(str::to_string)
        .or_else(|| {
            team.attributes
                .short_name
                .clone()
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| format!("Team {}", team.id))
}
