//! Operational KPI derivation for curated flight batches
//!
//! This module computes the seven operational KPIs from a curated record
//! set. All delay and duration figures are recomputed from timestamps: the
//! `delay_minutes` value supplied by the source is untrusted and is never
//! read (it does not even reach the record model).
//!
//! Timestamp differences are kept as fractional minutes (seconds / 60) at
//! full precision throughout; only the final report values are rounded, to
//! two decimal places.
//!
//! The engine never fails. Empty or degenerate input ("no completed
//! flights", "no records at all") is a valid operational state and yields
//! the documented zero/empty values.

pub mod durations;
pub mod engine;
pub mod rankings;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::compute_metrics;
pub use report::{AircraftRevenue, MetricsReport, RouteCount};
