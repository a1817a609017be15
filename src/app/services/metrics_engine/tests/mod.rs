//! Tests for the metrics engine


// Test helper functions and fixtures
use crate::app::models::{FlightRecord, FlightStatus};
use chrono::{Duration, TimeZone, Utc};

/// Create a completed flight with the given delay and airborne duration
pub fn completed_flight(
    flight_id: &str,
    aircraft_id: &str,
    origin: &str,
    destination: &str,
    fare_usd: f64,
    delay_minutes: i64,
    duration_minutes: i64,
) -> FlightRecord {
    let scheduled_departure = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
    let actual_departure = scheduled_departure + Duration::minutes(delay_minutes);
    let actual_arrival = actual_departure + Duration::minutes(duration_minutes);

    FlightRecord {
        flight_id: flight_id.to_string(),
        aircraft_id: aircraft_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        scheduled_departure,
        scheduled_arrival: scheduled_departure + Duration::minutes(duration_minutes),
        actual_departure: Some(actual_departure),
        actual_arrival: Some(actual_arrival),
        status: FlightStatus::Completed,
        fare_usd,
        flight_date: scheduled_departure.date_naive(),
    }
}

/// Create a cancelled flight with no actual timestamps and zero fare
pub fn cancelled_flight(
    flight_id: &str,
    aircraft_id: &str,
    origin: &str,
    destination: &str,
) -> FlightRecord {
    let scheduled_departure = Utc.with_ymd_and_hms(2025, 3, 14, 11, 0, 0).unwrap();

    FlightRecord {
        flight_id: flight_id.to_string(),
        aircraft_id: aircraft_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        scheduled_departure,
        scheduled_arrival: scheduled_departure + Duration::hours(2),
        actual_departure: None,
        actual_arrival: None,
        status: FlightStatus::Cancelled,
        fare_usd: 0.0,
        flight_date: scheduled_departure.date_naive(),
    }
}
