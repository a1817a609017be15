//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the command implementations: logging setup, pipeline statistics, and the
//! final report printers.

use crate::Result;
use crate::app::services::metrics_engine::MetricsReport;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

/// Pipeline statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Number of rows read from the source
    pub rows_read: usize,
    /// Records dropped by deduplication
    pub duplicates_removed: usize,
    /// Records dropped by validation
    pub invalid_removed: usize,
    /// Records in the curated set
    pub curated_records: usize,
    /// Records newly inserted into the store
    pub records_inserted: usize,
    /// Records skipped by the store as already present
    pub records_skipped: usize,
    /// Where the metrics document was written, when it was
    pub metrics_path: Option<PathBuf>,
    /// Where curated records were persisted, when they were
    pub database_path: Option<PathBuf>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl PipelineStats {
    /// Total records removed by cleansing
    pub fn total_removed(&self) -> usize {
        self.duplicates_removed + self.invalid_removed
    }
}

/// Set up structured logging writing to stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flightops_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the metrics report in a human-readable layout
pub fn print_metrics_report(report: &MetricsReport) {
    println!("\n{}", "Operational KPIs".bright_green().bold());

    println!(
        "  {} {}",
        "Total flights:".bright_cyan(),
        report.total_flights.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Completed flights:".bright_cyan(),
        report.completed_flights.to_string().bright_white().bold()
    );
    println!(
        "  {} {}%",
        "Cancellation rate:".bright_cyan(),
        report.cancellation_rate.to_string().bright_white().bold()
    );
    println!(
        "  {} {} min",
        "Average delay:".bright_cyan(),
        report
            .average_delay_minutes
            .to_string()
            .bright_white()
            .bold()
    );
    println!(
        "  {} {} min",
        "Median duration:".bright_cyan(),
        report
            .median_duration_minutes
            .to_string()
            .bright_white()
            .bold()
    );

    println!("  {}", "Top routes:".bright_cyan());
    for (rank, entry) in report.top_routes.iter().enumerate() {
        println!(
            "    {}. {} ({} flights)",
            rank + 1,
            entry.route.bright_white(),
            entry.count
        );
    }

    println!("  {}", "Aircraft utilization:".bright_cyan());
    for (aircraft, count) in &report.aircraft_utilization {
        println!("    {}: {} flights", aircraft.bright_white(), count);
    }

    println!("  {}", "Top aircraft by revenue:".bright_cyan());
    for (rank, entry) in report.top_aircraft_by_revenue.iter().enumerate() {
        println!(
            "    {}. {} (${:.2})",
            rank + 1,
            entry.aircraft.bright_white(),
            entry.revenue
        );
    }
}

/// Print the final run summary in a human-readable layout
pub fn print_run_summary(stats: &PipelineStats) {
    println!("\n{}", "Pipeline complete".bright_green().bold());
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.rows_read.to_string().bright_white().bold()
    );
    println!(
        "  {} {} ({} duplicates, {} invalid)",
        "Removed:".bright_cyan(),
        stats.total_removed().to_string().bright_white().bold(),
        stats.duplicates_removed,
        stats.invalid_removed
    );
    println!(
        "  {} {}",
        "Curated records:".bright_cyan(),
        stats.curated_records.to_string().bright_white().bold()
    );

    if let Some(database_path) = &stats.database_path {
        println!(
            "  {} {} inserted, {} already present ({})",
            "Persisted:".bright_cyan(),
            stats.records_inserted.to_string().bright_white().bold(),
            stats.records_skipped,
            database_path.display()
        );
    }
    if let Some(metrics_path) = &stats.metrics_path {
        println!(
            "  {} {}",
            "Metrics:".bright_cyan(),
            metrics_path.display().to_string().bright_white()
        );
    }

    println!(
        "  {} {:.2}s",
        "Elapsed:".bright_cyan(),
        stats.processing_time.as_secs_f64()
    );
}
