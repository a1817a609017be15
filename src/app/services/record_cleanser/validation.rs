//! Record validation for flight-operation batches
//!
//! Validation runs on the deduplicated batch and decides, once per record,
//! whether it enters the curated set. A record that breaks several rules is
//! still counted once. The actual departure/arrival timestamps are never
//! inspected here: their absence is legitimate for cancelled flights.

use crate::app::models::{FlightRecord, RawFlightRecord};
use crate::constants::{PROGRESS_UPDATE_INTERVAL, columns};
use indicatif::ProgressBar;
use std::fmt;
use tracing::{debug, info};

use super::stats::CleansingStats;

/// Why a record was removed during validation
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// A critical field is absent or unparseable
    MissingCriticalField(&'static str),
    /// The fare is negative
    NegativeFare(f64),
    /// The scheduled departure is after the scheduled arrival
    ScheduleOutOfOrder,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MissingCriticalField(field) => {
                write!(f, "missing critical field '{}'", field)
            }
            RejectionReason::NegativeFare(fare) => write!(f, "negative fare {}", fare),
            RejectionReason::ScheduleOutOfOrder => {
                write!(f, "scheduled departure after scheduled arrival")
            }
        }
    }
}

/// Validate deduplicated records and build the curated set
///
/// Every surviving record is converted to a [`FlightRecord`] with its
/// `flight_date` derived from the scheduled departure. Every dropped record
/// increments `invalid_removed` exactly once.
pub fn validate_records(
    records: Vec<RawFlightRecord>,
    stats: &mut CleansingStats,
    progress_bar: Option<&ProgressBar>,
) -> Vec<FlightRecord> {
    let total = records.len();
    let mut curated = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.inc(1);
            if index % PROGRESS_UPDATE_INTERVAL == 0 {
                pb.set_message(format!("Validating record {} of {}", index + 1, total));
            }
        }

        match curate_record(record) {
            Ok(flight) => curated.push(flight),
            Err(reason) => {
                stats.invalid_removed += 1;
                debug!("Record rejected: {}", reason);
            }
        }
    }

    info!(
        "Validation complete: {} -> {} records ({} invalid removed)",
        total,
        curated.len(),
        stats.invalid_removed
    );

    curated
}

/// Apply the validation rules to a single record
///
/// Returns the curated record, or the first reason for rejection. Blank
/// strings count as absent: an empty flight identifier is as useless as a
/// missing one.
pub fn curate_record(
    record: RawFlightRecord,
) -> std::result::Result<FlightRecord, RejectionReason> {
    let flight_id = require_text(record.flight_id, columns::FLIGHT_ID)?;
    let aircraft_id = require_text(record.aircraft_id, columns::AIRCRAFT_ID)?;
    let origin = require_text(record.origin, columns::ORIGIN)?;
    let destination = require_text(record.destination, columns::DESTINATION)?;

    let scheduled_departure = record
        .scheduled_departure
        .ok_or(RejectionReason::MissingCriticalField(
            columns::SCHEDULED_DEPARTURE,
        ))?;
    let scheduled_arrival = record
        .scheduled_arrival
        .ok_or(RejectionReason::MissingCriticalField(
            columns::SCHEDULED_ARRIVAL,
        ))?;
    let status = record
        .status
        .ok_or(RejectionReason::MissingCriticalField(columns::STATUS))?;
    let fare_usd = record
        .fare_usd
        .ok_or(RejectionReason::MissingCriticalField(columns::FARE_USD))?;

    if fare_usd < 0.0 {
        return Err(RejectionReason::NegativeFare(fare_usd));
    }

    if scheduled_departure > scheduled_arrival {
        return Err(RejectionReason::ScheduleOutOfOrder);
    }

    Ok(FlightRecord {
        flight_id,
        aircraft_id,
        origin,
        destination,
        scheduled_departure,
        scheduled_arrival,
        actual_departure: record.actual_departure,
        actual_arrival: record.actual_arrival,
        status,
        fare_usd,
        flight_date: scheduled_departure.date_naive(),
    })
}

/// Require a non-blank text field
fn require_text(
    value: Option<String>,
    field: &'static str,
) -> std::result::Result<String, RejectionReason> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(RejectionReason::MissingCriticalField(field)),
    }
}
