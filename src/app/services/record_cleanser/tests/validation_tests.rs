//! Tests for record validation

use super::{base_departure, create_cancelled_raw_record, create_raw_record};
use crate::app::services::record_cleanser::stats::CleansingStats;
use crate::app::services::record_cleanser::validation::{
    RejectionReason, curate_record, validate_records,
};
use chrono::{NaiveDate, TimeZone, Utc};

#[test]
fn test_valid_record_is_curated() {
    let flight = curate_record(create_raw_record("FL100")).unwrap();

    assert_eq!(flight.flight_id, "FL100");
    assert_eq!(
        flight.flight_date,
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    );
}

#[test]
fn test_cancelled_record_without_actuals_is_curated() {
    // Absent actual timestamps are legitimate, not a validation failure
    let flight = curate_record(create_cancelled_raw_record("FL200")).unwrap();

    assert_eq!(flight.actual_departure, None);
    assert_eq!(flight.actual_arrival, None);
}

#[test]
fn test_negative_fare_is_rejected() {
    let mut record = create_raw_record("FL100");
    record.fare_usd = Some(-0.01);

    assert_eq!(
        curate_record(record).unwrap_err(),
        RejectionReason::NegativeFare(-0.01)
    );
}

#[test]
fn test_zero_fare_is_accepted() {
    let mut record = create_raw_record("FL100");
    record.fare_usd = Some(0.0);

    assert!(curate_record(record).is_ok());
}

#[test]
fn test_schedule_out_of_order_is_rejected() {
    let mut record = create_raw_record("FL100");
    record.scheduled_arrival = Some(Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap());

    assert_eq!(
        curate_record(record).unwrap_err(),
        RejectionReason::ScheduleOutOfOrder
    );
}

#[test]
fn test_departure_equal_to_arrival_is_accepted() {
    let mut record = create_raw_record("FL100");
    record.scheduled_arrival = Some(base_departure());

    assert!(curate_record(record).is_ok());
}

#[test]
fn test_each_missing_critical_field_is_rejected() {
    let cases: Vec<(&str, Box<dyn Fn(&mut crate::app::models::RawFlightRecord)>)> = vec![
        ("flight_id", Box::new(|r| r.flight_id = None)),
        ("aircraft_id", Box::new(|r| r.aircraft_id = None)),
        ("origin", Box::new(|r| r.origin = None)),
        ("destination", Box::new(|r| r.destination = None)),
        (
            "scheduled_departure",
            Box::new(|r| r.scheduled_departure = None),
        ),
        (
            "scheduled_arrival",
            Box::new(|r| r.scheduled_arrival = None),
        ),
        ("status", Box::new(|r| r.status = None)),
        ("fare_usd", Box::new(|r| r.fare_usd = None)),
    ];

    for (field, mutate) in cases {
        let mut record = create_raw_record("FL100");
        mutate(&mut record);
        assert_eq!(
            curate_record(record).unwrap_err(),
            RejectionReason::MissingCriticalField(field),
            "expected rejection for missing {}",
            field
        );
    }
}

#[test]
fn test_blank_text_counts_as_missing() {
    let mut record = create_raw_record("FL100");
    record.flight_id = Some("   ".to_string());

    assert_eq!(
        curate_record(record).unwrap_err(),
        RejectionReason::MissingCriticalField("flight_id")
    );
}

#[test]
fn test_record_breaking_multiple_rules_counted_once() {
    let mut stats = CleansingStats::new();
    let mut record = create_raw_record("FL100");
    // Negative fare AND inverted schedule
    record.fare_usd = Some(-10.0);
    record.scheduled_arrival = Some(Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap());

    let curated = validate_records(vec![record], &mut stats, None);

    assert!(curated.is_empty());
    assert_eq!(stats.invalid_removed, 1);
}

#[test]
fn test_validation_batch_counts() {
    let mut stats = CleansingStats::new();
    let mut bad_fare = create_raw_record("FL101");
    bad_fare.fare_usd = Some(-5.0);
    let mut no_status = create_raw_record("FL102");
    no_status.status = None;

    let records = vec![create_raw_record("FL100"), bad_fare, no_status];
    let curated = validate_records(records, &mut stats, None);

    assert_eq!(curated.len(), 1);
    assert_eq!(stats.invalid_removed, 2);
}

#[test]
fn test_curated_records_satisfy_invariants() {
    let curated = validate_records(
        vec![
            create_raw_record("FL100"),
            create_cancelled_raw_record("FL200"),
        ],
        &mut CleansingStats::new(),
        None,
    );

    for flight in &curated {
        assert!(flight.validate().is_ok());
    }
}
