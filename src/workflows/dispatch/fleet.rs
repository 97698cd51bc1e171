use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::workflows::estimating::SurchargePolicy;

use super::domain::{
    AssignmentRequest, AssignmentResult, CostComparisonEntry, RankedTruck, Truck,
};

const MAX_ALTERNATIVE_TRUCKS: usize = 2;
const MAX_ALTERNATIVE_DATES: usize = 3;

/// Picks the most cost-efficient truck for a job, with ranked runners-up and
/// a nearest-available-date fallback when nothing fits.
///
/// Shares the time-of-day surcharge policy with the pricing engine; note the
/// dispatch column of that policy flattens night to the off-hours rate.
#[derive(Debug, Clone, Default)]
pub struct FleetAssignmentOptimizer {
    surcharges: SurchargePolicy,
}

impl FleetAssignmentOptimizer {
    pub fn new(surcharges: SurchargePolicy) -> Self {
        Self { surcharges }
    }

    /// Deterministic given the fleet ordering: candidates are ranked by
    /// efficiency descending with ties keeping their roster order.
    pub fn find_optimal_assignment(
        &self,
        request: &AssignmentRequest,
        fleet: &[Truck],
    ) -> AssignmentResult {
        let multiplier = self.surcharges.dispatch_multiplier(request.time_slot);

        let mut candidates: Vec<RankedTruck> = fleet
            .iter()
            .filter(|truck| {
                truck.capacity_points >= request.total_points
                    && truck.availability.contains(&request.preferred_date)
            })
            .map(|truck| {
                let total_cost =
                    (truck.cost_per_km * request.distance_km * multiplier).floor() as i64;
                let efficiency = if total_cost > 0 {
                    f64::from(truck.capacity_points) / total_cost as f64
                } else {
                    f64::from(truck.capacity_points)
                };
                RankedTruck {
                    truck: truck.clone(),
                    total_cost,
                    efficiency,
                }
            })
            .collect();

        if candidates.is_empty() {
            return AssignmentResult {
                success: false,
                recommended_truck: None,
                alternatives: Vec::new(),
                cost_comparison: Vec::new(),
                message: Some("no trucks available on requested date"),
                alternative_dates: nearest_alternative_dates(fleet, request.preferred_date),
            };
        }

        candidates.sort_by(|a, b| {
            b.efficiency
                .partial_cmp(&a.efficiency)
                .unwrap_or(Ordering::Equal)
        });

        let cost_comparison = candidates
            .iter()
            .map(|candidate| CostComparisonEntry {
                name: candidate.truck.name.clone(),
                cost: candidate.total_cost,
                efficiency: round_two_decimals(candidate.efficiency),
            })
            .collect();

        let mut ranked = candidates.into_iter();
        let recommended_truck = ranked.next();
        let alternatives: Vec<RankedTruck> = ranked.take(MAX_ALTERNATIVE_TRUCKS).collect();

        AssignmentResult {
            success: true,
            recommended_truck,
            alternatives,
            cost_comparison,
            message: None,
            alternative_dates: Vec::new(),
        }
    }
}

/// Union every truck's availability, deduplicate, and keep the three dates
/// closest to the preferred one; equally distant dates favor the earlier.
fn nearest_alternative_dates(fleet: &[Truck], preferred: NaiveDate) -> Vec<NaiveDate> {
    let unique: BTreeSet<NaiveDate> = fleet
        .iter()
        .flat_map(|truck| truck.availability.iter().copied())
        .collect();

    let mut dates: Vec<NaiveDate> = unique.into_iter().collect();
    dates.sort_by_key(|date| ((*date - preferred).num_days().abs(), *date));
    dates.truncate(MAX_ALTERNATIVE_DATES);
    dates
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
