mod availability;
mod business_days;

pub use availability::{AvailabilityDecision, DateAvailabilityValidator};
pub use business_days::{add_business_days, is_business_day, BOOKING_HORIZON_BUSINESS_DAYS};
