//! JSON export for the metrics report
//!
//! The report is serialized whole and written through a temporary sibling
//! file followed by a rename, so a failed export never leaves a truncated
//! document at the destination.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::MetricsSink;
use crate::app::services::metrics_engine::MetricsReport;
use crate::{Error, Result};

/// Metrics exporter writing a pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonMetricsExporter {
    destination: PathBuf,
}

impl JsonMetricsExporter {
    /// Create an exporter targeting the given file path
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// The destination path this exporter writes to
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

impl MetricsSink for JsonMetricsExporter {
    fn export(&mut self, report: &MetricsReport) -> Result<()> {
        if let Some(parent) = self.destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::io(
                        format!("Failed to create output directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let mut document = serde_json::to_string_pretty(report)?;
        document.push('\n');

        // Write-then-rename keeps the destination whole under failure
        let temp_path = self.destination.with_extension("json.tmp");
        fs::write(&temp_path, document).map_err(|e| {
            Error::io(
                format!("Failed to write metrics to {}", temp_path.display()),
                e,
            )
        })?;
        fs::rename(&temp_path, &self.destination).map_err(|e| {
            Error::io(
                format!(
                    "Failed to move metrics into place at {}",
                    self.destination.display()
                ),
                e,
            )
        })?;

        info!("Metrics exported to {}", self.destination.display());
        Ok(())
    }
}
