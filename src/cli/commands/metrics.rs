//! Metrics command implementation for the FlightOps processor CLI
//!
//! Cleanses the batch and derives the KPIs without touching either sink,
//! for quick inspection of an export before a full pipeline run.

use super::shared::{PipelineStats, print_metrics_report, setup_logging};
use crate::app::services::flight_csv_parser::FlightCsvParser;
use crate::app::services::metrics_engine::compute_metrics;
use crate::app::services::record_cleanser::RecordCleanser;
use crate::cli::args::{MetricsArgs, OutputFormat};
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info};

/// Metrics command runner for the FlightOps processor
///
/// Runs ingestion, cleansing, and KPI derivation only. Nothing is
/// persisted and no metrics document is written.
pub async fn run_metrics(args: MetricsArgs) -> Result<PipelineStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Starting metrics-only analysis");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    let input_path = &config.ingestion.input_path;
    if !input_path.exists() {
        return Err(Error::file_not_found(input_path.display().to_string()));
    }

    let parser = FlightCsvParser::new();
    let outcome = parser.parse_file(input_path)?;

    let cleanser = RecordCleanser::new();
    let cleansing = cleanser.cleanse(outcome.records, args.output_format == OutputFormat::Human);

    let report = compute_metrics(&cleansing.curated);

    let stats = PipelineStats {
        rows_read: outcome.stats.rows_read,
        duplicates_removed: cleansing.stats.duplicates_removed,
        invalid_removed: cleansing.stats.invalid_removed,
        curated_records: cleansing.record_count(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    };

    match args.output_format {
        OutputFormat::Human => {
            println!(
                "\nAnalyzed {} rows: {} curated ({} duplicates, {} invalid)",
                stats.rows_read,
                stats.curated_records,
                stats.duplicates_removed,
                stats.invalid_removed
            );
            print_metrics_report(&report);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(stats)
}
