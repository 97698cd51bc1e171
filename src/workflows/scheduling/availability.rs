use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::business_days::{add_business_days, BOOKING_HORIZON_BUSINESS_DAYS};

/// Outcome of a booking-date check. "Unavailable" is a normal business
/// answer, not an error, so the validator always returns a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityDecision {
    pub is_valid: bool,
    pub message: &'static str,
}

impl AvailabilityDecision {
    const fn valid(message: &'static str) -> Self {
        Self {
            is_valid: true,
            message,
        }
    }

    const fn invalid(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

/// Checks a requested service date against the booking window and the
/// blackout calendar supplied by the scheduling collaborator.
#[derive(Debug, Clone, Default)]
pub struct DateAvailabilityValidator;

impl DateAvailabilityValidator {
    pub fn new() -> Self {
        Self
    }

    /// `today` is injected by the caller; all inputs are date-only values,
    /// so instants must be truncated before they reach this check.
    pub fn validate(
        &self,
        requested: NaiveDate,
        today: NaiveDate,
        blackout_dates: &BTreeSet<NaiveDate>,
    ) -> AvailabilityDecision {
        if requested < today {
            return AvailabilityDecision::invalid("date must be today or later");
        }

        let max_date = add_business_days(today, BOOKING_HORIZON_BUSINESS_DAYS);
        if requested > max_date {
            return AvailabilityDecision::invalid("date must be within 60 business days");
        }

        if blackout_dates.contains(&requested) {
            return AvailabilityDecision::invalid("date is already booked");
        }

        AvailabilityDecision::valid("date is available")
    }
}
