//! Tests for the flight-operations CSV parser


use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header line matching the full required column set
pub const FULL_HEADER: &str = "flight_id,aircraft_id,origin,destination,\
scheduled_departure,actual_departure,scheduled_arrival,actual_arrival,\
status,delay_minutes,fare_usd";

/// Write a CSV file into a temp directory and return its path
pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// A well-formed completed-flight row
pub fn completed_row(flight_id: &str) -> String {
    format!(
        "{},B737,LHR,JFK,2025-03-14 09:00:00,2025-03-14 09:20:00,\
         2025-03-14 17:00:00,2025-03-14 17:05:00,completed,20,450.00",
        flight_id
    )
}

/// A well-formed cancelled-flight row with empty actual timestamps
pub fn cancelled_row(flight_id: &str) -> String {
    format!(
        "{},A320,CDG,AMS,2025-03-14 11:00:00,,2025-03-14 12:15:00,,cancelled,,0",
        flight_id
    )
}
