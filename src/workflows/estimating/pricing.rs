use chrono::NaiveDate;

use crate::workflows::scheduling::{add_business_days, BOOKING_HORIZON_BUSINESS_DAYS};

use super::domain::{EstimateRequest, EstimateResult, FareBreakdown, InvalidInput};
use super::rates::{RateTable, SurchargePolicy};

/// Stateless calculator turning an [`EstimateRequest`] into a priced
/// [`EstimateResult`]. Owns the rate card and surcharge policy; holds no
/// per-request state, so one engine can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: RateTable,
    surcharges: SurchargePolicy,
}

impl PricingEngine {
    pub fn new(rates: RateTable, surcharges: SurchargePolicy) -> Self {
        Self { rates, surcharges }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn surcharges(&self) -> &SurchargePolicy {
        &self.surcharges
    }

    /// Price one estimate request.
    ///
    /// `today` is supplied by the caller (date-only) so the calculation stays
    /// a pure function of its inputs. Either every figure is produced or an
    /// [`InvalidInput`] is raised before any result is constructed.
    pub fn calculate_estimate(
        &self,
        request: &EstimateRequest,
        today: NaiveDate,
    ) -> Result<EstimateResult, InvalidInput> {
        if request.distance_km <= 0.0 {
            return Err(InvalidInput::NonPositiveDistance);
        }
        if !(0.0..=1.0).contains(&request.tax_rate) {
            return Err(InvalidInput::TaxRateOutOfRange);
        }
        let horizon = add_business_days(today, BOOKING_HORIZON_BUSINESS_DAYS);
        if request.move_date < today || request.move_date > horizon {
            return Err(InvalidInput::MoveDateOutOfRange);
        }

        let total_points: u32 = request.items.iter().map(|item| item.points()).sum();
        let base_rate = self.rates.base_rate_for(total_points);
        let base_fare = (request.distance_km * base_rate as f64).floor() as i64;

        let multiplier = self.surcharges.estimate_multiplier(request.time_slot);
        let fare_with_surcharge = (base_fare as f64 * multiplier).floor() as i64;
        let time_surcharge = fare_with_surcharge - base_fare;

        // `selected_options` is a set, so a duplicated code in the inbound
        // payload is counted once.
        let options_total: i64 = request
            .selected_options
            .iter()
            .map(|option| self.rates.option_price(*option))
            .sum();

        let subtotal = fare_with_surcharge + options_total;
        let total = (subtotal as f64 * (1.0 + request.tax_rate)).floor() as i64;
        let tax_amount = total - subtotal;

        Ok(EstimateResult {
            base_fare,
            time_surcharge,
            options_total,
            subtotal,
            tax_amount,
            total,
            breakdown: FareBreakdown {
                distance_km: request.distance_km,
                total_points,
                base_rate_per_km: base_rate,
                time_slot: request.time_slot,
                selected_options: request.selected_options.clone(),
            },
        })
    }
}
