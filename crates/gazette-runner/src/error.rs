//! Error types for the runner binary.

use gazette_content::ContentError;
use gazette_gen::GeneratorError;

use crate::config::ConfigError;

/// Errors that can stop the runner before or during its day loop.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resource files could not be read.
    #[error("content loading error: {0}")]
    Content(#[from] ContentError),

    /// The generator refused its content.
    #[error("generator setup error: {0}")]
    Generator(#[from] GeneratorError),

    /// The configured start date is not a valid calendar date.
    #[error("invalid start date: year {year}, day {day} (day must be 1..=28, year >= 1)")]
    InvalidStartDate {
        /// Configured year.
        year: u32,
        /// Configured day of season.
        day: u8,
    },
}
