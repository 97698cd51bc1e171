use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ServiceOption, TimeSlot};

/// One step of the tiered per-kilometer rate. `max_points: None` marks the
/// open-ended top tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    pub max_points: Option<u32>,
    pub rate_per_km: i64,
}

/// Rate card owned by the pricing engine: the point-tiered base rate and the
/// flat prices for optional services.
///
/// The tables live here as engine-owned configuration rather than module
/// globals so a future version can load them from an external source without
/// touching any call signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    tiers: Vec<RateTier>,
    option_prices: BTreeMap<ServiceOption, i64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                RateTier {
                    max_points: Some(50),
                    rate_per_km: 800,
                },
                RateTier {
                    max_points: Some(100),
                    rate_per_km: 1000,
                },
                RateTier {
                    max_points: Some(200),
                    rate_per_km: 1200,
                },
                RateTier {
                    max_points: None,
                    rate_per_km: 1500,
                },
            ],
            option_prices: BTreeMap::from([
                (ServiceOption::Packing, 10_000),
                (ServiceOption::Cleaning, 15_000),
                (ServiceOption::Storage, 20_000),
                (ServiceOption::Disposal, 8_000),
            ]),
        }
    }
}

impl RateTable {
    /// Resolve the per-kilometer base rate for an inventory point total.
    /// Tiers are consulted in declared order; the open tier catches the rest.
    pub fn base_rate_for(&self, total_points: u32) -> i64 {
        for tier in &self.tiers {
            match tier.max_points {
                Some(max) if total_points <= max => return tier.rate_per_km,
                Some(_) => continue,
                None => return tier.rate_per_km,
            }
        }
        // A table without an open tier prices the overflow at zero rather
        // than guessing a rate.
        0
    }

    /// Flat price for an optional service; unknown codes contribute nothing.
    pub fn option_price(&self, option: ServiceOption) -> i64 {
        self.option_prices.get(&option).copied().unwrap_or(0)
    }
}

/// Time-of-day multipliers for both engines.
///
/// The estimate and dispatch columns intentionally disagree on the night
/// rate (1.3 vs a flat 1.2). The divergence is inherited business behavior
/// kept as explicit data until the pricing desk rules on unifying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurchargePolicy {
    pub early_morning: f64,
    pub night: f64,
    pub dispatch_off_hours: f64,
}

impl Default for SurchargePolicy {
    fn default() -> Self {
        Self {
            early_morning: 1.2,
            night: 1.3,
            dispatch_off_hours: 1.2,
        }
    }
}

impl SurchargePolicy {
    /// Multiplier applied to a customer-facing fare.
    pub fn estimate_multiplier(&self, slot: TimeSlot) -> f64 {
        match slot {
            TimeSlot::EarlyMorning => self.early_morning,
            TimeSlot::Night => self.night,
            TimeSlot::Normal | TimeSlot::Other => 1.0,
        }
    }

    /// Multiplier applied to a truck's operating cost during dispatch.
    pub fn dispatch_multiplier(&self, slot: TimeSlot) -> f64 {
        match slot {
            TimeSlot::EarlyMorning | TimeSlot::Night => self.dispatch_off_hours,
            TimeSlot::Normal | TimeSlot::Other => 1.0,
        }
    }
}
