//! Individual row parsing for flight-operations CSV files

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    parse_datetime_field, parse_f64_field, parse_optional_datetime_field, parse_status_field,
    parse_string_field,
};
use super::stats::ParseStats;
use crate::app::models::RawFlightRecord;
use crate::constants::columns;

/// Parse a single flight record from a CSV row
///
/// Never fails: every field is parsed leniently and absent/unparseable
/// values are left as `None` for the cleansing stage to judge. The
/// `delay_minutes` column is intentionally skipped — the supplied value is
/// untrusted and delay is always recomputed from timestamps.
pub fn parse_flight_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    stats: &mut ParseStats,
) -> RawFlightRecord {
    RawFlightRecord {
        flight_id: parse_string_field(record, mapping, columns::FLIGHT_ID, stats),
        aircraft_id: parse_string_field(record, mapping, columns::AIRCRAFT_ID, stats),
        origin: parse_string_field(record, mapping, columns::ORIGIN, stats),
        destination: parse_string_field(record, mapping, columns::DESTINATION, stats),
        scheduled_departure: parse_datetime_field(
            record,
            mapping,
            columns::SCHEDULED_DEPARTURE,
            stats,
        ),
        scheduled_arrival: parse_datetime_field(record, mapping, columns::SCHEDULED_ARRIVAL, stats),
        actual_departure: parse_optional_datetime_field(
            record,
            mapping,
            columns::ACTUAL_DEPARTURE,
            stats,
        ),
        actual_arrival: parse_optional_datetime_field(
            record,
            mapping,
            columns::ACTUAL_ARRIVAL,
            stats,
        ),
        status: parse_status_field(record, mapping, columns::STATUS, stats),
        fare_usd: parse_f64_field(record, mapping, columns::FARE_USD, stats),
    }
}
