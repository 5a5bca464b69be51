//! Range loading: turn a focal date plus a view granularity into the final,
//! filtered, normalized, deduplicated event list, with per-date and per-team
//! memoization and best-effort prefetch of the adjacent range.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::cache::AsyncCache;
use crate::category::Classifier;
use crate::dedup::deduplicate;
use crate::facility::FacilityConfig;
use crate::fetch::{Fetch, FetchError};
use crate::model::calendar_event::CalendarEvent;
use crate::model::event::{EventAttributes, RawEvent};
use crate::normalize::normalize;
use crate::teams::TeamDirectory;

/// Calendar view window driving how many dates are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

/// Terminal failure of one `load` call. Per-unit fetch/parse problems never
/// reach this; only an aborted worker task does.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("range load failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Calendar dates covered by a view. Weeks start on Sunday; a month covers
/// every day of the focal date's month.
pub fn date_range(date: NaiveDate, granularity: Granularity) -> Vec<NaiveDate> {
    match granularity {
        Granularity::Day => vec![date],
        Granularity::Week => {
            let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
            (0..7).map(|i| sunday + Duration::days(i)).collect()
        }
        Granularity::Month => {
            let mut dates = Vec::new();
            let mut day = date.with_day(1).unwrap_or(date);
            while day.month() == date.month() {
                dates.push(day);
                let Some(next) = day.succ_opt() else { break };
                day = next;
            }
            dates
        }
    }
}

/// Dates warmed in the background after a load: the adjacent day for day
/// view, all 14 days of the previous and next weeks for week view.
pub fn prefetch_dates(date: NaiveDate, granularity: Granularity) -> Vec<NaiveDate> {
    match granularity {
        Granularity::Day => {
            vec![date - Duration::days(1), date + Duration::days(1)]
        }
        Granularity::Week => {
            let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
            (0..7)
                .map(|i| sunday - Duration::days(7 - i))
                .chain((0..7).map(|i| sunday + Duration::days(7 + i)))
                .collect()
        }
        Granularity::Month => Vec::new(),
    }
}

pub struct ScheduleLoader<F> {
    fetcher: Arc<F>,
    teams: TeamDirectory<F>,
    events: Arc<AsyncCache<NaiveDate, Arc<Vec<RawEvent>>>>,
    config: Arc<FacilityConfig>,
    classifier: Arc<Classifier>,
}

impl<F> Clone for ScheduleLoader<F> {
    fn clone(&self) -> Self {
        ScheduleLoader {
            fetcher: Arc::clone(&self.fetcher),
            teams: self.teams.clone(),
            events: Arc::clone(&self.events),
            config: Arc::clone(&self.config),
            classifier: Arc::clone(&self.classifier),
        }
    }
}

impl<F: Fetch> ScheduleLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, FacilityConfig::default(), Classifier::default())
    }

    /// Build a loader with explicit facility configuration and classifier
    /// rules. Caches are owned by this instance, so tests and embedders can
    /// construct isolated loaders.
    pub fn with_config(fetcher: F, config: FacilityConfig, classifier: Classifier) -> Self {
        let fetcher = Arc::new(fetcher);
        ScheduleLoader {
            teams: TeamDirectory::new(Arc::clone(&fetcher)),
            fetcher,
            events: Arc::new(AsyncCache::new()),
            config: Arc::new(config),
            classifier: Arc::new(classifier),
        }
    }

    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    /// Load, filter, normalize and deduplicate all events for the view
    /// containing `date`. Missing or malformed per-date files contribute zero
    /// events; only an aborted worker task fails the whole call.
    #[instrument(level = "info", skip(self))]
    pub async fn load(
        &self,
        date: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<CalendarEvent>, ScheduleError> {
        let dates = date_range(date, granularity);

        let mut tasks = JoinSet::new();
        for day in dates {
            let loader = self.clone();
            tasks.spawn(async move { loader.events_for_date(day).await });
        }
        let mut raw: Vec<RawEvent> = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let day_events = joined?;
            raw.extend(day_events.iter().cloned());
        }

        // Warm the adjacent range in the background; never blocks the result.
        self.spawn_prefetch(date, granularity);

        let filtered: Vec<RawEvent> = raw
            .into_iter()
            .filter(|e| self.passes_filters(&e.attributes))
            .collect();

        let mut team_ids: HashSet<i64> = HashSet::new();
        for event in &filtered {
            if let Some(id) = event.attributes.hteam_id.filter(|&id| id != 0) {
                team_ids.insert(id);
            }
            if let Some(id) = event.attributes.vteam_id.filter(|&id| id != 0) {
                team_ids.insert(id);
            }
        }
        let teams = self.teams.resolve_batch(team_ids).await;

        let normalized: Vec<CalendarEvent> = filtered
            .iter()
            .filter_map(|e| normalize(e, &teams, &self.config, &self.classifier))
            .collect();
        let events = deduplicate(normalized, &teams);

        info!(count = events.len(), "composed calendar events");
        Ok(events)
    }

    /// Raw events for one date, memoized for the process lifetime. A missing
    /// file is a normal state and caches as an empty list, as does a file
    /// that fails to fetch or parse.
    pub async fn events_for_date(&self, date: NaiveDate) -> Arc<Vec<RawEvent>> {
        self.events
            .get_or_load(date, || async move {
                let path = format!("events/{}.json", date.format("%Y-%m-%d"));
                match self.fetcher.fetch(&path).await {
                    Ok(body) => match serde_json::from_str::<Vec<RawEvent>>(&body) {
                        Ok(events) => Arc::new(events),
                        Err(e) => {
                            warn!(%date, error = %e, "failed to parse event file");
                            Arc::new(Vec::new())
                        }
                    },
                    Err(FetchError::NotFound) => {
                        debug!(%date, "no event file for date");
                        Arc::new(Vec::new())
                    }
                    Err(e) => {
                        warn!(%date, error = %e, "failed to fetch event file");
                        Arc::new(Vec::new())
                    }
                }
            })
            .await
    }

    /// Whether a date's event file has already been fetched and cached.
    pub async fn is_cached(&self, date: NaiveDate) -> bool {
        self.events.contains(&date).await
    }

    fn passes_filters(&self, attrs: &EventAttributes) -> bool {
        let on_calendar_rink = attrs
            .resource_id
            .is_some_and(|id| self.config.is_calendar_rink(id));
        let not_block =
            attrs.event_type_id.as_deref() != Some(self.config.blocked_event_type.as_str());
        let has_allowed_home_team = attrs
            .hteam_id
            .is_some_and(|id| id != 0 && !self.config.is_excluded_team(id));
        on_calendar_rink && not_block && has_allowed_home_team
    }

    fn spawn_prefetch(&self, date: NaiveDate, granularity: Granularity) {
        for day in prefetch_dates(date, granularity) {
            let loader = self.clone();
            tokio::spawn(async move {
                // Best effort: per-date failures already cache as empty.
                loader.events_for_date(day).await;
                debug!(date = %day, "prefetched adjacent date");
            });
        }
    }
}
