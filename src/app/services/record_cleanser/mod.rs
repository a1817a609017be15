//! Record cleansing for flight-operation batches
//!
//! This module implements the two-pass cleansing pipeline that turns a raw
//! ingested batch into the curated record set:
//!
//! 1. **Deduplication** — scan in source order and keep only the first
//!    record seen for each `flight_id`.
//! 2. **Validation** — drop records with missing critical fields, negative
//!    fares, or a scheduled departure after the scheduled arrival, and
//!    derive `flight_date` for every survivor.
//!
//! The pass order is load-bearing: validating first would reject a record
//! whose duplicate happens to be invalid while keeping a distinct invalid
//! record, changing which rows survive. Deduplication therefore always runs
//! against the raw batch, including rows validation would later reject.
//!
//! The stage is stateless and deterministic: cleansing the same input twice
//! produces identical output, and the curated set is a fixed point
//! (re-cleansing it removes nothing).

pub mod cleanser;
pub mod deduplication;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cleanser::RecordCleanser;
pub use stats::{CleansingResult, CleansingStats};
pub use validation::RejectionReason;

// Re-export utility functions that might be useful externally
pub use deduplication::{are_duplicates, deduplicate_records};
pub use validation::{curate_record, validate_records};
