use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the customer's declared inventory. Bulk is abstracted into
/// points rather than literal volume or weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub count: u32,
    pub unit_points: u32,
}

impl InventoryItem {
    pub fn points(&self) -> u32 {
        self.count * self.unit_points
    }
}

/// Requested departure window for the move crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Normal,
    EarlyMorning,
    Night,
    #[serde(other)]
    Other,
}

impl TimeSlot {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "daytime",
            Self::EarlyMorning => "early morning",
            Self::Night => "night",
            Self::Other => "unspecified",
        }
    }
}

/// Optional add-on services a customer can attach to an estimate.
/// Codes outside the known set deserialize to `Other` and price at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOption {
    Packing,
    Cleaning,
    Storage,
    Disposal,
    #[serde(other)]
    Other,
}

impl ServiceOption {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Packing => "Packing service",
            Self::Cleaning => "Cleaning service",
            Self::Storage => "Temporary storage",
            Self::Disposal => "Disposal service",
            Self::Other => "Unrecognized option",
        }
    }
}

/// Immutable input to [`PricingEngine::calculate_estimate`].
///
/// [`PricingEngine::calculate_estimate`]: super::PricingEngine::calculate_estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub distance_km: f64,
    pub items: Vec<InventoryItem>,
    pub time_slot: TimeSlot,
    pub selected_options: BTreeSet<ServiceOption>,
    pub move_date: NaiveDate,
    pub tax_rate: f64,
}

/// Inputs echoed back alongside the priced figures for audit rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub distance_km: f64,
    pub total_points: u32,
    pub base_rate_per_km: i64,
    pub time_slot: TimeSlot,
    pub selected_options: BTreeSet<ServiceOption>,
}

/// Priced estimate. All amounts are integers in the smallest currency unit,
/// produced by flooring so rounding never overcharges. Constructed once,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub base_fare: i64,
    pub time_surcharge: i64,
    pub options_total: i64,
    pub subtotal: i64,
    pub tax_amount: i64,
    pub total: i64,
    pub breakdown: FareBreakdown,
}

/// The only failure the calculators raise. Everything else ("no trucks",
/// "date is booked") is a successful computation with a negative answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("distance must be greater than zero")]
    NonPositiveDistance,
    #[error("tax rate must be between 0 and 1")]
    TaxRateOutOfRange,
    #[error("move date must be within 60 business days")]
    MoveDateOutOfRange,
}
