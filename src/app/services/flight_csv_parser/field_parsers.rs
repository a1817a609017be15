//! Field parsing utilities for flight-operations CSV records
//!
//! All parsers here are lenient: an absent or unparseable value yields
//! `None` and is recorded on the parse statistics. Rejection of records with
//! missing critical fields belongs to the cleansing stage, not to ingestion.

use super::column_mapping::ColumnMapping;
use super::stats::ParseStats;
use crate::app::models::FlightStatus;
use crate::constants::{DATETIME_FORMAT_WITH_TZ, DATETIME_FORMATS};
use chrono::{DateTime, NaiveDateTime, Utc};
use csv::StringRecord;
use std::str::FromStr;
use tracing::debug;

/// Get a non-empty, trimmed field value from a CSV record
pub fn get_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .index_of(field_name)
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Parse a string field, treating empty values as absent
pub fn parse_string_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    stats: &mut ParseStats,
) -> Option<String> {
    match get_field(record, mapping, field_name) {
        Some(value) => Some(value.to_string()),
        None => {
            stats.fields_missing += 1;
            None
        }
    }
}

/// Parse a datetime field in any of the accepted formats
pub fn parse_datetime_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    stats: &mut ParseStats,
) -> Option<DateTime<Utc>> {
    let value = match get_field(record, mapping, field_name) {
        Some(value) => value,
        None => {
            stats.fields_missing += 1;
            return None;
        }
    };

    match parse_datetime(value) {
        Some(timestamp) => Some(timestamp),
        None => {
            debug!(
                "Failed to parse {} value '{}' as a timestamp",
                field_name, value
            );
            stats.fields_unparseable += 1;
            None
        }
    }
}

/// Parse a datetime field that may legitimately be absent
///
/// Used for the actual departure/arrival timestamps, which are empty for
/// cancelled flights: absence is not counted as a missing field, only an
/// unparseable non-empty value is recorded.
pub fn parse_optional_datetime_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    stats: &mut ParseStats,
) -> Option<DateTime<Utc>> {
    let value = get_field(record, mapping, field_name)?;

    match parse_datetime(value) {
        Some(timestamp) => Some(timestamp),
        None => {
            debug!(
                "Failed to parse {} value '{}' as a timestamp",
                field_name, value
            );
            stats.fields_unparseable += 1;
            None
        }
    }
}

/// Parse a non-negative-or-otherwise decimal field
pub fn parse_f64_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    stats: &mut ParseStats,
) -> Option<f64> {
    let value = match get_field(record, mapping, field_name) {
        Some(value) => value,
        None => {
            stats.fields_missing += 1;
            return None;
        }
    };

    match value.parse::<f64>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("Failed to parse {} value '{}' as a number", field_name, value);
            stats.fields_unparseable += 1;
            None
        }
    }
}

/// Parse the status field; unknown values are preserved, not rejected
pub fn parse_status_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    stats: &mut ParseStats,
) -> Option<FlightStatus> {
    match get_field(record, mapping, field_name) {
        // FlightStatus::from_str is infallible over non-empty input
        Some(value) => FlightStatus::from_str(value).ok(),
        None => {
            stats.fields_missing += 1;
            None
        }
    }
}

/// Parse a timestamp string in any of the accepted formats
///
/// Tries the offset-carrying format first, then the naive formats (which are
/// interpreted as UTC).
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_str(value, DATETIME_FORMAT_WITH_TZ) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
    }

    None
}
