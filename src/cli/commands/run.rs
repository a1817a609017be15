//! Run command implementation for the FlightOps processor CLI
//!
//! This module contains the complete pipeline workflow: ingestion,
//! cleansing, KPI derivation, record persistence, and metrics export.

use super::shared::{PipelineStats, print_metrics_report, print_run_summary, setup_logging};
use crate::app::services::flight_csv_parser::FlightCsvParser;
use crate::app::services::metrics_engine::{MetricsReport, compute_metrics};
use crate::app::services::record_cleanser::RecordCleanser;
use crate::app::services::sinks::{CuratedSink, FlightStore, JsonMetricsExporter, MetricsSink};
use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info};

/// Run command runner for the FlightOps processor
///
/// Orchestrates the entire pipeline:
/// 1. Set up logging and configuration
/// 2. Parse the flight-operations CSV export
/// 3. Cleanse the raw batch (deduplicate, then validate)
/// 4. Compute the operational KPIs
/// 5. Persist curated records and export the metrics document
pub async fn run_pipeline(args: RunArgs) -> Result<PipelineStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting FlightOps processor");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let config = args.to_config();
    debug!("Pipeline configuration: {:?}", config);

    let input_path = &config.ingestion.input_path;
    if !input_path.exists() {
        return Err(Error::file_not_found(input_path.display().to_string()));
    }

    // Ingest the raw batch; a missing required column aborts here
    let parser = FlightCsvParser::new();
    let outcome = parser.parse_file(input_path)?;

    // Cleanse: deduplicate first, then validate
    let cleanser = RecordCleanser::new();
    let cleansing = cleanser.cleanse(outcome.records, args.show_progress());

    // Derive the seven KPIs from the curated set
    let report = compute_metrics(&cleansing.curated);

    let mut stats = PipelineStats {
        rows_read: outcome.stats.rows_read,
        duplicates_removed: cleansing.stats.duplicates_removed,
        invalid_removed: cleansing.stats.invalid_removed,
        curated_records: cleansing.record_count(),
        ..Default::default()
    };

    if args.dry_run {
        info!("Dry run - no records persisted, no metrics written");
        println!(
            "Dry run: would persist {} curated records and write metrics to {}",
            stats.curated_records,
            config.output.metrics_path().display()
        );
    } else {
        write_outputs(&config, &cleansing.curated, &report, &mut stats)?;
    }

    stats.processing_time = start_time.elapsed();

    // Generate final report
    generate_final_report(&args, &stats, &report)?;

    Ok(stats)
}

/// Hand the two pipeline outputs to their sinks
///
/// Records are persisted before the metrics document is written; each
/// output is atomic on its own, so a failure here aborts the run without
/// leaving a partially applied sink behind.
fn write_outputs(
    config: &Config,
    curated: &[crate::app::models::FlightRecord],
    report: &MetricsReport,
    stats: &mut PipelineStats,
) -> Result<()> {
    let database_path = config.output.resolve_database_path()?;
    let mut store = FlightStore::open(&database_path)?;
    let persist_stats = store.persist(curated)?;

    stats.records_inserted = persist_stats.inserted;
    stats.records_skipped = persist_stats.skipped;
    stats.database_path = Some(database_path);

    let metrics_path = config.output.metrics_path();
    let mut exporter = JsonMetricsExporter::new(&metrics_path);
    exporter.export(report)?;

    stats.metrics_path = Some(metrics_path);

    Ok(())
}

/// Generate the final pipeline report
fn generate_final_report(
    args: &RunArgs,
    stats: &PipelineStats,
    report: &MetricsReport,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_run_summary(stats);
                print_metrics_report(report);
            }
            Ok(())
        }
        OutputFormat::Json => generate_json_report(stats, report),
    }
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &PipelineStats, report: &MetricsReport) -> Result<()> {
    let json_stats = serde_json::json!({
        "rows_read": stats.rows_read,
        "duplicates_removed": stats.duplicates_removed,
        "invalid_removed": stats.invalid_removed,
        "curated_records": stats.curated_records,
        "records_inserted": stats.records_inserted,
        "records_skipped": stats.records_skipped,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "metrics": report,
    });

    println!("{}", serde_json::to_string_pretty(&json_stats)?);
    Ok(())
}
