//! Record deduplication for flight-operation batches
//!
//! Deduplication keys on `flight_id` alone and keeps the first record seen
//! in source order, matching the upstream export convention that the first
//! occurrence is authoritative. It runs before validation on purpose — see
//! the module documentation in [`super`].

use crate::app::models::RawFlightRecord;
use crate::constants::PROGRESS_UPDATE_INTERVAL;
use indicatif::ProgressBar;
use std::collections::HashSet;
use tracing::{debug, info};

use super::stats::CleansingStats;

/// Deduplicate records by flight identifier, first occurrence wins
///
/// Records without a `flight_id` carry no identity and pass through
/// untouched; validation removes them in the next pass. Every dropped
/// duplicate is counted on the statistics.
///
/// # Arguments
///
/// * `records` - Input records in source order
/// * `stats` - Mutable reference to cleansing statistics
/// * `progress_bar` - Optional progress bar for tracking progress
///
/// # Returns
///
/// Vector of deduplicated records, preserving source order
pub fn deduplicate_records(
    records: Vec<RawFlightRecord>,
    stats: &mut CleansingStats,
    progress_bar: Option<&ProgressBar>,
) -> Vec<RawFlightRecord> {
    let total = records.len();
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(total);
    let mut deduplicated = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.inc(1);
            if index % PROGRESS_UPDATE_INTERVAL == 0 {
                pb.set_message(format!("Scanning record {} of {}", index + 1, total));
            }
        }

        match &record.flight_id {
            Some(flight_id) => {
                if seen_ids.insert(flight_id.clone()) {
                    deduplicated.push(record);
                } else {
                    stats.duplicates_removed += 1;
                    debug!("Dropped duplicate of flight {}", flight_id);
                }
            }
            // No identity to deduplicate on; validation rejects it next
            None => deduplicated.push(record),
        }
    }

    info!(
        "Deduplication complete: {} -> {} records ({} duplicates removed)",
        total,
        deduplicated.len(),
        stats.duplicates_removed
    );

    deduplicated
}

/// Check if two records are considered duplicates of each other
///
/// Two records are duplicates when both carry the same non-absent
/// `flight_id`; identity-less records never match anything.
pub fn are_duplicates(a: &RawFlightRecord, b: &RawFlightRecord) -> bool {
    match (&a.flight_id, &b.flight_id) {
        (Some(id_a), Some(id_b)) => id_a == id_b,
        _ => false,
    }
}
