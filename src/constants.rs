//! Application constants for the FlightOps processor
//!
//! This module contains the column names, status values, metric limits,
//! and default paths used throughout the pipeline.

// =============================================================================
// CSV Columns
// =============================================================================

/// Standard column names in flight-operations CSV exports
pub mod columns {
    pub const FLIGHT_ID: &str = "flight_id";
    pub const AIRCRAFT_ID: &str = "aircraft_id";
    pub const ORIGIN: &str = "origin";
    pub const DESTINATION: &str = "destination";
    pub const SCHEDULED_DEPARTURE: &str = "scheduled_departure";
    pub const ACTUAL_DEPARTURE: &str = "actual_departure";
    pub const SCHEDULED_ARRIVAL: &str = "scheduled_arrival";
    pub const ACTUAL_ARRIVAL: &str = "actual_arrival";
    pub const STATUS: &str = "status";
    pub const DELAY_MINUTES: &str = "delay_minutes";
    pub const FARE_USD: &str = "fare_usd";
}

/// Columns that must be present in the source header for ingestion to begin
pub const REQUIRED_COLUMNS: &[&str] = &[
    columns::FLIGHT_ID,
    columns::AIRCRAFT_ID,
    columns::ORIGIN,
    columns::DESTINATION,
    columns::SCHEDULED_DEPARTURE,
    columns::ACTUAL_DEPARTURE,
    columns::SCHEDULED_ARRIVAL,
    columns::ACTUAL_ARRIVAL,
    columns::STATUS,
    columns::DELAY_MINUTES,
    columns::FARE_USD,
];

/// Columns whose absence on a record disqualifies it during validation
///
/// The actual departure/arrival timestamps are NOT critical: a cancelled
/// flight legitimately has neither. The `delay_minutes` column is required
/// in the header but its values are never read.
pub const CRITICAL_COLUMNS: &[&str] = &[
    columns::FLIGHT_ID,
    columns::AIRCRAFT_ID,
    columns::ORIGIN,
    columns::DESTINATION,
    columns::SCHEDULED_DEPARTURE,
    columns::SCHEDULED_ARRIVAL,
    columns::STATUS,
    columns::FARE_USD,
];

// =============================================================================
// Status Values
// =============================================================================

/// Flight status wire values
pub mod status {
    /// The flight operated and carries actual departure/arrival timestamps
    pub const COMPLETED: &str = "completed";

    /// The flight did not operate; actual timestamps may be absent
    pub const CANCELLED: &str = "cancelled";
}

// =============================================================================
// Metric Definitions
// =============================================================================

/// Number of routes reported by the top-routes KPI
pub const TOP_ROUTES_LIMIT: usize = 3;

/// Number of aircraft reported by the revenue KPI
pub const TOP_AIRCRAFT_LIMIT: usize = 2;

/// Separator used when formatting a route key
pub const ROUTE_SEPARATOR: &str = "→";

/// Decimal places kept on reported metric values
pub const METRIC_DECIMAL_PLACES: u32 = 2;

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Accepted naive datetime formats for flight timestamps, tried in order
pub const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Datetime format with explicit offset, tried before the naive formats
pub const DATETIME_FORMAT_WITH_TZ: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format used when rendering timestamps for storage
pub const STORAGE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used when rendering the derived flight date
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Output Defaults
// =============================================================================

/// Default input CSV filename
pub const DEFAULT_INPUT_FILENAME: &str = "flights.csv";

/// Default output directory for exported artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Metrics export filename within the output directory
pub const METRICS_OUTPUT_FILENAME: &str = "metrics.json";

/// Default SQLite database filename within the output directory
pub const DATABASE_FILENAME: &str = "flightops.db";

/// Table holding curated flight records
pub const FLIGHTS_TABLE: &str = "flights";

// =============================================================================
// Progress Reporting
// =============================================================================

/// Progress bar update interval (number of processed records)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a column participates in record validation
pub fn is_critical_column(column_name: &str) -> bool {
    CRITICAL_COLUMNS.contains(&column_name)
}

/// Format an origin/destination pair as a route key
pub fn format_route(origin: &str, destination: &str) -> String {
    format!("{}{}{}", origin, ROUTE_SEPARATOR, destination)
}
