use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::workflows::estimating::domain::{
    EstimateRequest, InventoryItem, ServiceOption, TimeSlot,
};
use crate::workflows::estimating::PricingEngine;

/// Monday used as the reference "today" across pricing specs.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 10).expect("valid date")
}

pub(super) fn engine() -> PricingEngine {
    PricingEngine::default()
}

/// 30 inventory points: one table (10) plus four chairs (20).
pub(super) fn small_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            name: "table".to_string(),
            count: 1,
            unit_points: 10,
        },
        InventoryItem {
            name: "chair".to_string(),
            count: 4,
            unit_points: 5,
        },
    ]
}

pub(super) fn standard_request() -> EstimateRequest {
    EstimateRequest {
        distance_km: 50.0,
        items: small_inventory(),
        time_slot: TimeSlot::Normal,
        selected_options: BTreeSet::new(),
        move_date: today(),
        tax_rate: 0.1,
    }
}

pub(super) fn request_with_options(options: &[ServiceOption]) -> EstimateRequest {
    EstimateRequest {
        selected_options: options.iter().copied().collect(),
        ..standard_request()
    }
}
