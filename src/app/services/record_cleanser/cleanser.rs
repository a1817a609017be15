//! Cleansing pipeline orchestration

use crate::app::models::RawFlightRecord;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{
    deduplication::deduplicate_records,
    stats::{CleansingResult, CleansingStats},
    validation::validate_records,
};

/// Cleanser for raw flight-operation batches
///
/// Applies deduplication and validation in that strict order and reports
/// what was removed. The cleanser holds no state: every invocation is a pure
/// function of its input, and an empty batch yields an empty curated set
/// with a zero-filled report rather than an error.
///
/// # Example
///
/// ```rust
/// use flightops_processor::app::services::record_cleanser::RecordCleanser;
///
/// let cleanser = RecordCleanser::new();
/// let result = cleanser.cleanse(Vec::new(), false);
/// assert_eq!(result.record_count(), 0);
/// assert_eq!(result.stats.duplicates_removed, 0);
/// ```
#[derive(Debug, Default)]
pub struct RecordCleanser;

impl RecordCleanser {
    /// Create a new record cleanser
    pub fn new() -> Self {
        Self
    }

    /// Run the full cleansing pipeline over a raw batch
    ///
    /// # Arguments
    ///
    /// * `records` - Raw records in source order
    /// * `show_progress` - Whether to show progress bars for the passes
    pub fn cleanse(&self, records: Vec<RawFlightRecord>, show_progress: bool) -> CleansingResult {
        let mut stats = CleansingStats::new();
        stats.total_input = records.len();

        info!("Starting cleansing pipeline for {} records", records.len());

        // Pass 1: deduplicate by flight_id, first occurrence wins
        let dedup_pb = show_progress
            .then(|| Self::create_cleansing_progress_bar(records.len() as u64, "Deduplication"));

        let deduplicated = deduplicate_records(records, &mut stats, dedup_pb.as_ref());

        if let Some(pb) = dedup_pb {
            pb.finish_with_message(format!(
                "Deduplication complete: {} records",
                deduplicated.len()
            ));
        }

        // Pass 2: validate and derive flight_date
        let validate_pb = show_progress
            .then(|| Self::create_cleansing_progress_bar(deduplicated.len() as u64, "Validation"));

        let curated = validate_records(deduplicated, &mut stats, validate_pb.as_ref());

        if let Some(pb) = validate_pb {
            pb.finish_with_message(format!("Validation complete: {} records", curated.len()));
        }

        stats.curated_count = curated.len();

        info!("{}", stats.summary());

        CleansingResult::new(curated, stats)
    }

    /// Create a progress bar for cleansing passes
    fn create_cleansing_progress_bar(total: u64, operation: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] \
                     {pos}/{len} ({percent}%) {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message(operation.to_string());
        pb
    }
}
