use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflows::estimating::TimeSlot;

/// Fleet roster entry as supplied by the external store. Availability is a
/// set of date-only values; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    pub name: String,
    pub capacity_points: u32,
    pub cost_per_km: f64,
    pub availability: BTreeSet<NaiveDate>,
}

/// Immutable input to [`FleetAssignmentOptimizer::find_optimal_assignment`].
///
/// [`FleetAssignmentOptimizer::find_optimal_assignment`]: super::FleetAssignmentOptimizer::find_optimal_assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub total_points: u32,
    pub distance_km: f64,
    pub time_slot: TimeSlot,
    pub preferred_date: NaiveDate,
}

/// A candidate truck with its priced trip cost and capacity-per-cost
/// efficiency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTruck {
    pub truck: Truck,
    pub total_cost: i64,
    pub efficiency: f64,
}

/// Row of the operator-facing cost comparison, efficiency rounded to two
/// decimals for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComparisonEntry {
    pub name: String,
    pub cost: i64,
    pub efficiency: f64,
}

/// Outcome of a fleet search. An empty candidate set is a successful
/// computation reported with `success: false` and fallback dates, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentResult {
    pub success: bool,
    pub recommended_truck: Option<RankedTruck>,
    pub alternatives: Vec<RankedTruck>,
    pub cost_comparison: Vec<CostComparisonEntry>,
    pub message: Option<&'static str>,
    pub alternative_dates: Vec<NaiveDate>,
}
