//! Gazette runner binary.
//!
//! Loads the headline templates and content catalog from resource files,
//! wires up the deterministic event generator, then walks a configured
//! date range day by day, logging every event rollover as it happens.
//! Running it twice with the same configuration produces the same stream.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `gazette-config.yaml`
//! 3. Load the template store and content catalog
//! 4. Wire the event generator and an empty event board
//! 5. Advance the board one day at a time, logging rollovers

mod config;
mod error;

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gazette_content::{ContentCatalog, TemplateStore};
use gazette_gen::{EventBoard, EventGenerator};
use gazette_types::{GameDate, SessionId};

use crate::config::RunnerConfig;
use crate::error::RunnerError;

/// Application entry point for the runner.
///
/// # Errors
///
/// Returns an error if configuration or resources fail to load, or the
/// configured start date is invalid.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("gazette-runner starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        session_id = config.session.id,
        template_dir = %config.resources.template_dir.display(),
        catalog_dir = %config.resources.catalog_dir.display(),
        days = config.run.days,
        "Configuration loaded"
    );

    // 3. Load content.
    let store = TemplateStore::load(&config.resources.template_dir)?;
    let catalog = ContentCatalog::load(&config.resources.catalog_dir)?;

    // 4. Wire the generator and board.
    let generator = EventGenerator::new(store, catalog)?;
    let session = SessionId::new(config.session.id);
    let mut board = EventBoard::new();

    let start = GameDate::new(
        config.run.start_year,
        config.run.start_season,
        config.run.start_day,
    )
    .ok_or(RunnerError::InvalidStartDate {
        year: config.run.start_year,
        day: config.run.start_day,
    })?;
    info!(start_date = %start, "Event board initialized");

    // 5. Day loop.
    let mut date = start;
    for _ in 0..config.run.days {
        for rollover in board.advance(&generator, date, session) {
            if let Some(expired) = &rollover.expired {
                info!(
                    cadence = %rollover.cadence,
                    headline = %expired.headline,
                    "event expired, price effect reverts"
                );
            }
            let issued = &rollover.issued;
            info!(
                date = %date,
                cadence = %rollover.cadence,
                headline = %issued.headline,
                affected_item_id = issued.affected_item_id,
                percent_change = issued.percent_change,
                original_price = issued.original_price,
                new_price = issued.new_price(),
                "event issued"
            );
        }
        match date.next_day() {
            Some(next) => date = next,
            None => {
                warn!(last_date = %date, "calendar exhausted, stopping early");
                break;
            }
        }
    }

    info!(end_date = %date, "gazette-runner finished");
    Ok(())
}

/// Load configuration from `gazette-config.yaml` (or the path given in
/// the `GAZETTE_CONFIG` environment variable), falling back to defaults
/// when the file does not exist.
fn load_config() -> Result<RunnerConfig, RunnerError> {
    let path = std::env::var("GAZETTE_CONFIG").unwrap_or_else(|_| "gazette-config.yaml".to_owned());
    let config_path = Path::new(&path);
    if config_path.exists() {
        Ok(RunnerConfig::from_file(config_path).map_err(RunnerError::Config)?)
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        Ok(RunnerConfig::default())
    }
}
