//! Configuration loading and typed config structures for the runner.
//!
//! The canonical configuration lives in `gazette-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, with defaults for every field so a missing or
//! partial file still yields a usable configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use gazette_types::Season;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level runner configuration. Mirrors `gazette-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    /// Session identity settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Resource directory locations.
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Date range to simulate.
    #[serde(default)]
    pub run: RunConfig,
}

impl RunnerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_str_contents(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_str_contents(contents: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(contents)
    }
}

/// Session identity settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Stable per-playthrough identifier folded into every seed.
    #[serde(default)]
    pub id: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { id: 0 }
    }
}

/// Resource directory locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceConfig {
    /// Directory holding `monthly.txt`, `biweekly.txt`, `weekly.txt`.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory holding `items.txt`, `locations.txt`, and the category
    /// id lists.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            catalog_dir: default_catalog_dir(),
        }
    }
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("resources/templates")
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("resources/catalog")
}

/// Date range to simulate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Starting year (1-based).
    #[serde(default = "default_start_year")]
    pub start_year: u32,

    /// Starting season.
    #[serde(default = "default_start_season")]
    pub start_season: Season,

    /// Starting day of the season (1..=28).
    #[serde(default = "default_start_day")]
    pub start_day: u8,

    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            start_season: default_start_season(),
            start_day: default_start_day(),
            days: default_days(),
        }
    }
}

const fn default_start_year() -> u32 {
    1
}

const fn default_start_season() -> Season {
    Season::Spring
}

const fn default_start_day() -> u8 {
    1
}

const fn default_days() -> u32 {
    112
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = RunnerConfig::from_str_contents("{}").unwrap_or_default();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.run.days, 112);
        assert_eq!(config.run.start_season, Season::Spring);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "session:\n  id: 99\nrun:\n  start_season: winter\n";
        let config = RunnerConfig::from_str_contents(yaml).unwrap_or_default();
        assert_eq!(config.session.id, 99);
        assert_eq!(config.run.start_season, Season::Winter);
        assert_eq!(config.run.start_day, 1);
        assert_eq!(
            config.resources.template_dir,
            PathBuf::from("resources/templates")
        );
    }
}
