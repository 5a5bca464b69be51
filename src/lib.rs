//! Filterable calendar pipeline for a two-rink recreation facility.
//!
//! The ingestion job (out of scope here) publishes the facility schedule as
//! static per-day event files plus per-team files. This crate turns those
//! documents into display-ready calendar events: team resolution, heuristic
//! category classification, same-slot deduplication, and day/week/month range
//! loading with memoization and background prefetch.

pub mod cache;
pub mod category;
pub mod dedup;
pub mod facility;
pub mod fetch;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod teams;

pub use category::{CATEGORIES, Category, CategoryConfig, Classifier, category_config};
pub use facility::FacilityConfig;
pub use fetch::{DirFetcher, Fetch, FetchError, HttpFetcher};
pub use loader::{Granularity, ScheduleError, ScheduleLoader, date_range};
pub use model::calendar_event::CalendarEvent;
pub use model::event::RawEvent;
pub use model::event_type::EventType;
pub use model::team::RawTeam;
pub use teams::{TeamDirectory, TeamMap, display_name};
