//! Tests for the record cleansing pipeline

pub mod cleanser_tests;
pub mod validation_tests;

// Test helper functions and fixtures
use crate::app::models::{FlightStatus, RawFlightRecord};
use chrono::{DateTime, TimeZone, Utc};

/// Scheduled departure used by the default fixtures
pub fn base_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
}

/// Scheduled arrival used by the default fixtures
pub fn base_arrival() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 17, 0, 0).unwrap()
}

/// Create a fully populated completed-flight raw record
pub fn create_raw_record(flight_id: &str) -> RawFlightRecord {
    RawFlightRecord {
        flight_id: Some(flight_id.to_string()),
        aircraft_id: Some("B737".to_string()),
        origin: Some("LHR".to_string()),
        destination: Some("JFK".to_string()),
        scheduled_departure: Some(base_departure()),
        scheduled_arrival: Some(base_arrival()),
        actual_departure: Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 20, 0).unwrap()),
        actual_arrival: Some(Utc.with_ymd_and_hms(2025, 3, 14, 17, 10, 0).unwrap()),
        status: Some(FlightStatus::Completed),
        fare_usd: Some(450.0),
    }
}

/// Create a cancelled-flight raw record with absent actual timestamps
pub fn create_cancelled_raw_record(flight_id: &str) -> RawFlightRecord {
    RawFlightRecord {
        flight_id: Some(flight_id.to_string()),
        aircraft_id: Some("A320".to_string()),
        origin: Some("CDG".to_string()),
        destination: Some("AMS".to_string()),
        scheduled_departure: Some(base_departure()),
        scheduled_arrival: Some(base_arrival()),
        actual_departure: None,
        actual_arrival: None,
        status: Some(FlightStatus::Cancelled),
        fare_usd: Some(0.0),
    }
}

/// Create a raw record with a negative fare
pub fn create_negative_fare_record(flight_id: &str) -> RawFlightRecord {
    RawFlightRecord {
        fare_usd: Some(-120.0),
        ..create_raw_record(flight_id)
    }
}
