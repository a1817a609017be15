//! FlightOps Processor Library
//!
//! A Rust library for cleansing batches of airline flight-operation records
//! and deriving operational KPIs from them.
//!
//! This library provides tools for:
//! - Parsing flight-operations CSV exports with required-column checking
//! - Deduplicating records by flight identifier (first occurrence wins)
//! - Validating records against fare, schedule, and completeness rules
//! - Computing seven operational KPIs from timestamp arithmetic
//! - Persisting curated records to SQLite with idempotent upsert semantics
//! - Exporting the metrics report as an atomically written JSON document

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod flight_csv_parser;
        pub mod metrics_engine;
        pub mod record_cleanser;
        pub mod sinks;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FlightRecord, FlightStatus, RawFlightRecord};
pub use app::services::metrics_engine::MetricsReport;
pub use config::Config;

/// Result type alias for the FlightOps processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for FlightOps processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source structure is unusable (missing columns, unreadable file)
    #[error("Ingestion error in '{file}': {message}")]
    Ingestion { file: String, message: String },

    /// CSV row could not be read at all
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Persistence sink failure
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// Metrics export failure
    #[error("Metrics export error: {message}")]
    MetricsExport {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an ingestion error with file context
    pub fn ingestion(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Ingestion {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a store error with an underlying database cause
    pub fn store(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a store error without an underlying database cause
    pub fn store_message(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a metrics export error
    pub fn metrics_export(message: impl Into<String>) -> Self {
        Self::MetricsExport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Store {
            message: "Database operation failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::MetricsExport {
            message: "Metrics serialization failed".to_string(),
            source: Some(error),
        }
    }
}
