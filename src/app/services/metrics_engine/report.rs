//! Metrics report structure and export shape
//!
//! Field names here are the export contract: the serialized document must
//! carry exactly these seven keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the top-routes ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCount {
    /// Route key, formatted `ORIGIN→DESTINATION`
    pub route: String,
    /// Number of curated flights on this route
    pub count: u64,
}

/// One entry of the revenue ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftRevenue {
    /// Aircraft type code
    pub aircraft: String,
    /// Total fare revenue in USD, rounded to cents
    pub revenue: f64,
}

/// The seven operational KPIs derived from a curated batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Number of curated records
    pub total_flights: u64,

    /// Number of curated records with completed status
    pub completed_flights: u64,

    /// Share of cancelled flights in percent, 0 for an empty batch
    pub cancellation_rate: f64,

    /// Mean departure delay of completed flights in minutes, 0 if none
    pub average_delay_minutes: f64,

    /// Median airborne duration of completed flights in minutes, 0 if none
    pub median_duration_minutes: f64,

    /// Top routes by flight count, descending, ties by first occurrence
    pub top_routes: Vec<RouteCount>,

    /// Flight count per aircraft type; a mapping, not a ranking
    pub aircraft_utilization: BTreeMap<String, u64>,

    /// Top aircraft by total fare revenue, descending, ties by first occurrence
    pub top_aircraft_by_revenue: Vec<AircraftRevenue>,
}

impl MetricsReport {
    /// The report for an empty curated set
    pub fn empty() -> Self {
        Self {
            total_flights: 0,
            completed_flights: 0,
            cancellation_rate: 0.0,
            average_delay_minutes: 0.0,
            median_duration_minutes: 0.0,
            top_routes: Vec::new(),
            aircraft_utilization: BTreeMap::new(),
            top_aircraft_by_revenue: Vec::new(),
        }
    }
}

impl Default for MetricsReport {
    fn default() -> Self {
        Self::empty()
    }
}
