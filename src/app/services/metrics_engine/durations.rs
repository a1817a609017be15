//! Delay and duration arithmetic over curated records

use crate::app::models::FlightRecord;

/// Round a metric value to two decimal places for reporting
pub fn round_metric(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Departure delays in fractional minutes, completed flights only
///
/// A completed record missing its actual departure contributes nothing
/// rather than failing; the cleansing invariants make that combination
/// unreachable from the shipped ingestion, but the engine tolerates it.
pub fn completed_delays(records: &[FlightRecord]) -> Vec<f64> {
    records
        .iter()
        .filter_map(FlightRecord::delay_minutes)
        .collect()
}

/// Airborne durations in fractional minutes, completed flights only
pub fn completed_durations(records: &[FlightRecord]) -> Vec<f64> {
    records
        .iter()
        .filter_map(FlightRecord::duration_minutes)
        .collect()
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard median, `None` for an empty slice
///
/// For an even count the median is the mean of the two middle values.
pub fn median_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
