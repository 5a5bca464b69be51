//! Diagnostic CLI: load one view's worth of schedule and print the agenda.
//!
//! Usage: `rink-agenda <YYYY-MM-DD> [day|week|month]`, with the document
//! source selected by `RINK_DATA_DIR` (local snapshot) or `RINK_DATA_URL`.

use std::env;
use std::error::Error;

use chrono::NaiveDate;
use tracing::info;

use rink_calendar::{
    CalendarEvent, DirFetcher, Fetch, Granularity, HttpFetcher, ScheduleLoader, category_config,
};

async fn print_agenda<F: Fetch>(
    loader: ScheduleLoader<F>,
    date: NaiveDate,
    granularity: Granularity,
) -> Result<(), Box<dyn Error>> {
    let events: Vec<CalendarEvent> = loader.load(date, granularity).await?;
    info!(count = events.len(), "loaded events");
    for event in &events {
        println!(
            "{} - {}  [{}]  {}  {}  ({})",
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%H:%M"),
            event.resource_name,
            event.event_type.label(),
            event.title,
            category_config(event.category).name
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();

    let mut args = env::args().skip(1);
    let date: NaiveDate = args
        .next()
        .ok_or("usage: rink-agenda <YYYY-MM-DD> [day|week|month]")?
        .parse()?;
    let granularity = match args.next().as_deref() {
        None | Some("day") => Granularity::Day,
        Some("week") => Granularity::Week,
        Some("month") => Granularity::Month,
        Some(other) => return Err(format!("unknown granularity: {}", other).into()),
    };

    if let Ok(dir) = env::var("RINK_DATA_DIR") {
        print_agenda(ScheduleLoader::new(DirFetcher::new(dir)), date, granularity).await
    } else {
        let url = env::var("RINK_DATA_URL")
            .map_err(|_| "set RINK_DATA_DIR or RINK_DATA_URL to locate the schedule documents")?;
        print_agenda(ScheduleLoader::new(HttpFetcher::new(url)), date, granularity).await
    }
}
