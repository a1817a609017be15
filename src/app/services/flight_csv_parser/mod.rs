//! CSV parsing for flight-operations exports
//!
//! This module turns a flight-operations CSV file into a batch of
//! [`RawFlightRecord`](crate::app::models::RawFlightRecord) values. Parsing
//! is deliberately lenient at the field level: a row with a broken fare or
//! timestamp still produces a record (with the broken field absent) so that
//! the cleansing stage can deduplicate it before deciding its fate. Only
//! structural problems are fatal here:
//!
//! - a required column missing from the header aborts ingestion before any
//!   row is read,
//! - a row the CSV reader cannot decode at all aborts the run.
//!
//! The `delay_minutes` column must be present in the header but its values
//! are never parsed: delay is always recomputed from timestamps downstream.

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::{FlightCsvParser, ParseOutcome};
pub use stats::ParseStats;
