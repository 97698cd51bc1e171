//! Pricing of a relocation job from itemized inventory, distance,
//! time-of-day, and optional services.

pub mod domain;
mod pricing;
mod quote;
mod rates;

#[cfg(test)]
mod tests;

pub use domain::{
    EstimateRequest, EstimateResult, FareBreakdown, InvalidInput, InventoryItem, ServiceOption,
    TimeSlot,
};
pub use pricing::PricingEngine;
pub use quote::{quote_lines, QuoteLine};
pub use rates::{RateTable, RateTier, SurchargePolicy};
