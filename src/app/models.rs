//! Data models for FlightOps processing
//!
//! This module contains the core data structures for representing flight
//! operation events as they move through the pipeline: the lenient shape
//! produced by ingestion and the curated shape produced by cleansing.

use crate::constants::{self, status};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Flight Status
// =============================================================================

/// Operational status of a flight
///
/// Only `Completed` and `Cancelled` drive metric inclusion. Any other wire
/// value is preserved verbatim so that unexpected upstream states survive the
/// pipeline without being silently rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightStatus {
    /// The flight operated; actual departure and arrival are populated
    Completed,
    /// The flight did not operate; actual timestamps may be absent
    Cancelled,
    /// Any other status value, preserved as received
    Other(String),
}

impl FlightStatus {
    /// Check whether this status marks a completed flight
    pub fn is_completed(&self) -> bool {
        matches!(self, FlightStatus::Completed)
    }

    /// Check whether this status marks a cancelled flight
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FlightStatus::Cancelled)
    }

    /// Wire representation of this status
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::Completed => status::COMPLETED,
            FlightStatus::Cancelled => status::CANCELLED,
            FlightStatus::Other(value) => value,
        }
    }
}

impl FromStr for FlightStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            status::COMPLETED => Ok(FlightStatus::Completed),
            status::CANCELLED => Ok(FlightStatus::Cancelled),
            other => Ok(FlightStatus::Other(other.to_string())),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Raw Record (ingestion shape)
// =============================================================================

/// A flight-operation row as read from the source, before cleansing
///
/// Every critical field is optional here: ingestion records what it could
/// parse and leaves the rejection decision to the cleansing stage, so that a
/// row with a broken fare is still deduplicated against its well-formed twin
/// before validation runs. The CSV `delay_minutes` value is deliberately not
/// represented — it is untrusted and never read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFlightRecord {
    /// Intended unique flight identifier
    pub flight_id: Option<String>,

    /// Aircraft type code
    pub aircraft_id: Option<String>,

    /// Origin airport code
    pub origin: Option<String>,

    /// Destination airport code
    pub destination: Option<String>,

    /// Scheduled departure timestamp
    pub scheduled_departure: Option<DateTime<Utc>>,

    /// Scheduled arrival timestamp
    pub scheduled_arrival: Option<DateTime<Utc>>,

    /// Actual departure timestamp; absent for cancelled flights
    pub actual_departure: Option<DateTime<Utc>>,

    /// Actual arrival timestamp; absent for cancelled flights
    pub actual_arrival: Option<DateTime<Utc>>,

    /// Operational status
    pub status: Option<FlightStatus>,

    /// Ticket revenue in USD; cancelled flights carry 0
    pub fare_usd: Option<f64>,
}

impl From<FlightRecord> for RawFlightRecord {
    fn from(record: FlightRecord) -> Self {
        Self {
            flight_id: Some(record.flight_id),
            aircraft_id: Some(record.aircraft_id),
            origin: Some(record.origin),
            destination: Some(record.destination),
            scheduled_departure: Some(record.scheduled_departure),
            scheduled_arrival: Some(record.scheduled_arrival),
            actual_departure: record.actual_departure,
            actual_arrival: record.actual_arrival,
            status: Some(record.status),
            fare_usd: Some(record.fare_usd),
        }
    }
}

// =============================================================================
// Curated Record
// =============================================================================

/// A validated flight-operation record with its derived flight date
///
/// Constructed only by the cleansing stage; every instance satisfies the
/// curated-set invariants (non-empty identifiers, ordered schedule,
/// non-negative fare, flight date matching the scheduled departure).
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    /// Unique flight identifier and dedup key
    pub flight_id: String,

    /// Aircraft type code
    pub aircraft_id: String,

    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Scheduled departure timestamp
    pub scheduled_departure: DateTime<Utc>,

    /// Scheduled arrival timestamp
    pub scheduled_arrival: DateTime<Utc>,

    /// Actual departure timestamp; absent for cancelled flights
    pub actual_departure: Option<DateTime<Utc>>,

    /// Actual arrival timestamp; absent for cancelled flights
    pub actual_arrival: Option<DateTime<Utc>>,

    /// Operational status
    pub status: FlightStatus,

    /// Ticket revenue in USD
    pub fare_usd: f64,

    /// Calendar date of the scheduled departure
    pub flight_date: NaiveDate,
}

impl FlightRecord {
    /// Create a new flight record with validation
    ///
    /// Derives `flight_date` from the scheduled departure and checks the
    /// curated-set invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_id: String,
        aircraft_id: String,
        origin: String,
        destination: String,
        scheduled_departure: DateTime<Utc>,
        scheduled_arrival: DateTime<Utc>,
        actual_departure: Option<DateTime<Utc>>,
        actual_arrival: Option<DateTime<Utc>>,
        status: FlightStatus,
        fare_usd: f64,
    ) -> Result<Self> {
        let record = Self {
            flight_id,
            aircraft_id,
            origin,
            destination,
            scheduled_departure,
            scheduled_arrival,
            actual_departure,
            actual_arrival,
            status,
            fare_usd,
            flight_date: scheduled_departure.date_naive(),
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record data against the curated-set invariants
    pub fn validate(&self) -> Result<()> {
        if self.flight_id.trim().is_empty() {
            return Err(Error::data_validation(
                "Flight ID cannot be empty".to_string(),
            ));
        }

        if self.aircraft_id.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "Flight {} has an empty aircraft ID",
                self.flight_id
            )));
        }

        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "Flight {} is missing an airport code",
                self.flight_id
            )));
        }

        if self.scheduled_departure > self.scheduled_arrival {
            return Err(Error::data_validation(format!(
                "Flight {} has scheduled departure {} after scheduled arrival {}",
                self.flight_id, self.scheduled_departure, self.scheduled_arrival
            )));
        }

        if self.fare_usd < 0.0 {
            return Err(Error::data_validation(format!(
                "Flight {} has negative fare {}",
                self.flight_id, self.fare_usd
            )));
        }

        if self.flight_date != self.scheduled_departure.date_naive() {
            return Err(Error::data_validation(format!(
                "Flight {} has flight date {} inconsistent with scheduled departure {}",
                self.flight_id, self.flight_date, self.scheduled_departure
            )));
        }

        Ok(())
    }

    /// Route key for this flight, formatted `ORIGIN→DESTINATION`
    pub fn route(&self) -> String {
        constants::format_route(&self.origin, &self.destination)
    }

    /// Departure delay in fractional minutes, recomputed from timestamps
    ///
    /// Defined only for completed flights with an actual departure; the
    /// source's `delay_minutes` column is never consulted.
    pub fn delay_minutes(&self) -> Option<f64> {
        if !self.status.is_completed() {
            return None;
        }
        self.actual_departure
            .map(|actual| (actual - self.scheduled_departure).num_seconds() as f64 / 60.0)
    }

    /// Airborne duration in fractional minutes, from actual timestamps
    ///
    /// Defined only for completed flights with both actual timestamps.
    pub fn duration_minutes(&self) -> Option<f64> {
        if !self.status.is_completed() {
            return None;
        }
        match (self.actual_departure, self.actual_arrival) {
            (Some(departure), Some(arrival)) => {
                Some((arrival - departure).num_seconds() as f64 / 60.0)
            }
            _ => None,
        }
    }
}
