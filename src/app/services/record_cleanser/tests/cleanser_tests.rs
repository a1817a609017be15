//! Tests for the full cleansing pipeline

use super::{create_cancelled_raw_record, create_negative_fare_record, create_raw_record};
use crate::app::models::RawFlightRecord;
use crate::app::services::record_cleanser::RecordCleanser;

#[test]
fn test_empty_input_yields_empty_result() {
    let result = RecordCleanser::new().cleanse(Vec::new(), false);

    assert!(result.curated.is_empty());
    assert_eq!(result.stats.total_input, 0);
    assert_eq!(result.stats.duplicates_removed, 0);
    assert_eq!(result.stats.invalid_removed, 0);
    assert_eq!(result.stats.curated_count, 0);
}

#[test]
fn test_dedup_runs_before_validation() {
    // First occurrence is invalid (negative fare), second is a valid
    // duplicate. Strict ordering demands that BOTH are removed: the second
    // as a duplicate, the first as invalid. Validating first would instead
    // keep the valid twin.
    let records = vec![
        create_negative_fare_record("FL100"),
        create_raw_record("FL100"),
    ];

    let result = RecordCleanser::new().cleanse(records, false);

    assert!(result.curated.is_empty());
    assert_eq!(result.stats.duplicates_removed, 1);
    assert_eq!(result.stats.invalid_removed, 1);
}

#[test]
fn test_mixed_batch() {
    let records = vec![
        create_raw_record("FL100"),
        create_raw_record("FL100"), // duplicate
        create_cancelled_raw_record("FL101"),
        create_negative_fare_record("FL102"), // invalid
        create_raw_record("FL103"),
    ];

    let result = RecordCleanser::new().cleanse(records, false);

    assert_eq!(result.record_count(), 3);
    assert_eq!(result.stats.total_input, 5);
    assert_eq!(result.stats.duplicates_removed, 1);
    assert_eq!(result.stats.invalid_removed, 1);
    assert_eq!(result.stats.curated_count, 3);

    let ids: Vec<&str> = result
        .curated
        .iter()
        .map(|f| f.flight_id.as_str())
        .collect();
    assert_eq!(ids, vec!["FL100", "FL101", "FL103"]);
}

#[test]
fn test_cleansing_is_idempotent() {
    // The curated set is a fixed point: feeding it back through the
    // cleanser removes nothing and changes nothing.
    let records = vec![
        create_raw_record("FL100"),
        create_raw_record("FL100"),
        create_cancelled_raw_record("FL101"),
        create_negative_fare_record("FL102"),
    ];

    let cleanser = RecordCleanser::new();
    let first = cleanser.cleanse(records, false);

    let replay: Vec<RawFlightRecord> = first
        .curated
        .iter()
        .cloned()
        .map(RawFlightRecord::from)
        .collect();
    let second = cleanser.cleanse(replay, false);

    assert_eq!(second.curated, first.curated);
    assert_eq!(second.stats.duplicates_removed, 0);
    assert_eq!(second.stats.invalid_removed, 0);
}

#[test]
fn test_cleansing_is_deterministic() {
    let records = vec![
        create_raw_record("FL100"),
        create_raw_record("FL101"),
        create_raw_record("FL100"),
    ];

    let cleanser = RecordCleanser::new();
    let first = cleanser.cleanse(records.clone(), false);
    let second = cleanser.cleanse(records, false);

    assert_eq!(first.curated, second.curated);
    assert_eq!(first.stats, second.stats);
}
