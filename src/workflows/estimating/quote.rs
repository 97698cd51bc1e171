use serde::Serialize;

use super::domain::EstimateResult;
use super::rates::RateTable;

/// One row of the back-office quote rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub label: String,
    pub amount: i64,
}

/// Project a priced estimate into ordered display rows: base fare, surcharge
/// (when charged), each priced option, tax, and the grand total.
///
/// Amounts are copied from the estimate or looked up in the rate card, never
/// recomputed, so the rows always sum to the estimate's own total.
pub fn quote_lines(estimate: &EstimateResult, rates: &RateTable) -> Vec<QuoteLine> {
    let mut lines = vec![QuoteLine {
        label: "Base fare".to_string(),
        amount: estimate.base_fare,
    }];

    if estimate.time_surcharge > 0 {
        lines.push(QuoteLine {
            label: format!("{} surcharge", estimate.breakdown.time_slot.label()),
            amount: estimate.time_surcharge,
        });
    }

    for option in &estimate.breakdown.selected_options {
        let price = rates.option_price(*option);
        if price > 0 {
            lines.push(QuoteLine {
                label: option.label().to_string(),
                amount: price,
            });
        }
    }

    lines.push(QuoteLine {
        label: "Consumption tax".to_string(),
        amount: estimate.tax_amount,
    });
    lines.push(QuoteLine {
        label: "Total".to_string(),
        amount: estimate.total,
    });

    lines
}
