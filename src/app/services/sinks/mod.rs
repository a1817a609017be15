//! Sink adapter contracts and implementations
//!
//! The core pipeline hands its two outputs to sinks through the narrow
//! traits defined here: the curated record set goes to a [`CuratedSink`]
//! and the metrics report to a [`MetricsSink`]. Each sink output is atomic
//! on its own — a failing sink aborts the run without corrupting the other
//! sink's output.
//!
//! Shipped implementations: a SQLite store with idempotent insert-if-absent
//! semantics keyed on `flight_id`, and a JSON exporter that writes the
//! report via a temporary file and rename.

pub mod flight_store;
pub mod metrics_export;

// Re-export main types for easy access
pub use flight_store::{FlightStore, PersistStats};
pub use metrics_export::JsonMetricsExporter;

use crate::Result;
use crate::app::models::FlightRecord;
use crate::app::services::metrics_engine::MetricsReport;

/// Destination for the curated record set
///
/// Implementations must be idempotent: re-submitting an identical curated
/// sequence leaves the stored logical state unchanged.
pub trait CuratedSink {
    /// Persist a curated batch, returning what was written and skipped
    fn persist(&mut self, records: &[FlightRecord]) -> Result<PersistStats>;
}

/// Destination for the metrics report
pub trait MetricsSink {
    /// Export a metrics report as a whole document
    fn export(&mut self, report: &MetricsReport) -> Result<()>;
}
