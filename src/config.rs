//! Configuration management for the FlightOps processor
//!
//! Provides configuration structures for the ingestion source and the two
//! sink destinations, with defaults resolved from [`crate::constants`] and
//! standard user directories.

use crate::constants::{DATABASE_FILENAME, DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_DIR,
    METRICS_OUTPUT_FILENAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ingestion source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Path to the flight-operations CSV export
    pub input_path: PathBuf,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILENAME),
        }
    }
}

/// Sink destination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the exported metrics document
    pub output_dir: PathBuf,

    /// Explicit database location; when absent the store lives in the
    /// user data directory so repeated runs upsert into the same database
    pub database_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            database_path: None,
        }
    }
}

impl OutputConfig {
    /// Full path of the exported metrics document
    pub fn metrics_path(&self) -> PathBuf {
        self.output_dir.join(METRICS_OUTPUT_FILENAME)
    }

    /// Resolve the database location, falling back to the user data directory
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }
}

/// Global configuration for a pipeline run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ingestion source settings
    pub ingestion: IngestionConfig,

    /// Sink destination settings
    pub output: OutputConfig,
}

impl Config {
    /// Create configuration with a custom input path
    pub fn with_input_path(mut self, input_path: PathBuf) -> Self {
        self.ingestion.input_path = input_path;
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output.output_dir = output_dir;
        self
    }

    /// Create configuration with an explicit database location
    pub fn with_database_path(mut self, database_path: PathBuf) -> Self {
        self.output.database_path = Some(database_path);
        self
    }
}

/// Default persistent database location under the user data directory
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::configuration("Could not determine user data directory"))?;
    Ok(data_dir.join("flightops-processor").join(DATABASE_FILENAME))
}
