//! KPI assembly over a curated batch

use crate::app::models::FlightRecord;
use tracing::info;

use super::durations::{completed_delays, completed_durations, mean_of, median_of, round_metric};
use super::rankings::{aircraft_utilization, top_aircraft_by_revenue, top_routes};
use super::report::MetricsReport;

/// Compute the seven operational KPIs from a curated record set
///
/// A pure function of its input: no state, no side effects beyond logging,
/// and no failure modes — degenerate input yields the documented zero/empty
/// values.
pub fn compute_metrics(records: &[FlightRecord]) -> MetricsReport {
    let total_flights = records.len() as u64;
    let completed_flights = records.iter().filter(|r| r.status.is_completed()).count() as u64;
    let cancelled_flights = records.iter().filter(|r| r.status.is_cancelled()).count() as u64;

    let cancellation_rate = if total_flights == 0 {
        0.0
    } else {
        round_metric(cancelled_flights as f64 / total_flights as f64 * 100.0)
    };

    let delays = completed_delays(records);
    let average_delay_minutes = mean_of(&delays).map(round_metric).unwrap_or(0.0);

    let durations = completed_durations(records);
    let median_duration_minutes = median_of(&durations).map(round_metric).unwrap_or(0.0);

    let report = MetricsReport {
        total_flights,
        completed_flights,
        cancellation_rate,
        average_delay_minutes,
        median_duration_minutes,
        top_routes: top_routes(records),
        aircraft_utilization: aircraft_utilization(records),
        top_aircraft_by_revenue: top_aircraft_by_revenue(records),
    };

    info!(
        "Metrics computed: {} flights, {} completed, {}% cancelled, \
         avg delay {} min, median duration {} min",
        report.total_flights,
        report.completed_flights,
        report.cancellation_rate,
        report.average_delay_minutes,
        report.median_duration_minutes
    );

    report
}
