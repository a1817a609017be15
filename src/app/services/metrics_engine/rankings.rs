//! Grouping and ranking aggregates over curated records
//!
//! Rankings are built in two steps: a fold that groups in first-occurrence
//! order, then a stable sort on the aggregate alone. Because the sort is
//! stable and the input order is the first-occurrence order, ties resolve
//! to whichever key appeared first in the curated set.

use crate::app::models::FlightRecord;
use crate::constants::{TOP_AIRCRAFT_LIMIT, TOP_ROUTES_LIMIT};
use std::collections::{BTreeMap, HashMap};

use super::durations::round_metric;
use super::report::{AircraftRevenue, RouteCount};

/// Fold records into `(key, aggregate)` pairs in first-occurrence order
fn group_in_first_occurrence_order<K, F, A>(
    records: &[FlightRecord],
    key_of: K,
    mut accumulate: A,
) -> Vec<(String, F)>
where
    K: Fn(&FlightRecord) -> String,
    F: Default,
    A: FnMut(&mut F, &FlightRecord),
{
    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, F)> = Vec::new();

    for record in records {
        let key = key_of(record);
        let index = *index_of.entry(key.clone()).or_insert_with(|| {
            groups.push((key, F::default()));
            groups.len() - 1
        });
        accumulate(&mut groups[index].1, record);
    }

    groups
}

/// Top routes by flight count, descending, ties by first occurrence
pub fn top_routes(records: &[FlightRecord]) -> Vec<RouteCount> {
    let mut counts: Vec<(String, u64)> =
        group_in_first_occurrence_order(records, FlightRecord::route, |count, _| *count += 1);

    // Stable sort: tied routes keep their first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_ROUTES_LIMIT)
        .map(|(route, count)| RouteCount { route, count })
        .collect()
}

/// Flight count per aircraft type; every aircraft present, no ranking
pub fn aircraft_utilization(records: &[FlightRecord]) -> BTreeMap<String, u64> {
    let mut utilization = BTreeMap::new();
    for record in records {
        *utilization.entry(record.aircraft_id.clone()).or_insert(0) += 1;
    }
    utilization
}

/// Top aircraft by total fare revenue, descending, ties by first occurrence
///
/// Cancelled flights contribute their zero fare, so an all-cancelled
/// aircraft is still eligible for a slot when fewer than two aircraft
/// carry revenue.
pub fn top_aircraft_by_revenue(records: &[FlightRecord]) -> Vec<AircraftRevenue> {
    let mut revenues: Vec<(String, f64)> = group_in_first_occurrence_order(
        records,
        |record| record.aircraft_id.clone(),
        |revenue, record| *revenue += record.fare_usd,
    );

    // Stable sort: tied aircraft keep their first-occurrence order
    revenues.sort_by(|a, b| b.1.total_cmp(&a.1));

    revenues
        .into_iter()
        .take(TOP_AIRCRAFT_LIMIT)
        .map(|(aircraft, revenue)| AircraftRevenue {
            aircraft,
            revenue: round_metric(revenue),
        })
        .collect()
}
