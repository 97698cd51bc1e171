use super::domain::{CustomerHistory, RiskAssessment, RiskLevel};

const CANCEL_RATE_THRESHOLD_PCT: i64 = 20;
const LATE_PAYMENT_ESCALATION_COUNT: u32 = 3;
const NEW_ACCOUNT_AGE_DAYS: u32 = 30;
const HIGH_VALUE_SPEND_THRESHOLD: i64 = 500_000;

/// Converts order history into a bounded risk score plus operator guidance.
///
/// Rules run in a fixed order and append their factor labels as they fire;
/// the high-value offset runs last and can reduce the score but never push
/// it below zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, history: &CustomerHistory) -> RiskAssessment {
        let mut score: i64 = 0;
        let mut factors: Vec<String> = Vec::new();

        let decided_orders = history.completed_orders + history.canceled_orders;
        if decided_orders > 0 {
            let cancel_rate =
                (100.0 * f64::from(history.canceled_orders) / f64::from(decided_orders)).round()
                    as i64;
            if cancel_rate > CANCEL_RATE_THRESHOLD_PCT {
                score += 2;
                factors.push("high cancellation rate".to_string());
            }
        }

        if history.late_payments > 0 {
            score += if history.late_payments > LATE_PAYMENT_ESCALATION_COUNT {
                3
            } else {
                1
            };
            factors.push("history of late payments".to_string());
        }

        if history.account_age_days < NEW_ACCOUNT_AGE_DAYS {
            score += 1;
            factors.push("new customer".to_string());
        }

        if history.total_spent > HIGH_VALUE_SPEND_THRESHOLD {
            score = (score - 2).max(0);
            factors.push("high-value customer".to_string());
        }

        let risk_level = match score {
            0 | 1 => RiskLevel::Low,
            2 | 3 => RiskLevel::Medium,
            _ => RiskLevel::High,
        };

        RiskAssessment {
            risk_score: score as u32,
            risk_level,
            factors,
            recommended_actions: risk_level
                .recommended_actions()
                .iter()
                .map(|action| action.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_history() -> CustomerHistory {
        CustomerHistory {
            completed_orders: 12,
            canceled_orders: 0,
            late_payments: 0,
            total_spent: 120_000,
            account_age_days: 400,
        }
    }

    #[test]
    fn clean_history_scores_low() {
        let assessment = RiskScorer::new().assess(&clean_history());
        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment.factors.is_empty());
        assert_eq!(
            assessment.recommended_actions,
            vec!["proceed with standard handling"]
        );
    }

    #[test]
    fn troubled_history_scores_high_with_ordered_factors() {
        let history = CustomerHistory {
            completed_orders: 2,
            canceled_orders: 3,
            late_payments: 5,
            total_spent: 50_000,
            account_age_days: 10,
        };

        let assessment = RiskScorer::new().assess(&history);

        assert_eq!(assessment.risk_score, 6);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.factors,
            vec![
                "high cancellation rate",
                "history of late payments",
                "new customer"
            ]
        );
        assert_eq!(assessment.recommended_actions.len(), 3);
    }

    #[test]
    fn cancel_rate_at_threshold_does_not_fire() {
        let history = CustomerHistory {
            completed_orders: 8,
            canceled_orders: 2,
            ..clean_history()
        };

        let assessment = RiskScorer::new().assess(&history);
        assert_eq!(assessment.risk_score, 0);
        assert!(assessment.factors.is_empty());
    }

    #[test]
    fn few_late_payments_add_one_many_add_three() {
        let mild = CustomerHistory {
            late_payments: 3,
            ..clean_history()
        };
        assert_eq!(RiskScorer::new().assess(&mild).risk_score, 1);

        let severe = CustomerHistory {
            late_payments: 4,
            ..clean_history()
        };
        assert_eq!(RiskScorer::new().assess(&severe).risk_score, 3);
    }

    #[test]
    fn high_value_offset_never_goes_negative() {
        let history = CustomerHistory {
            total_spent: 800_000,
            account_age_days: 10,
            ..clean_history()
        };

        let assessment = RiskScorer::new().assess(&history);

        // +1 (new customer) - 2 (high value) clamps at zero.
        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.factors, vec!["new customer", "high-value customer"]);
    }

    #[test]
    fn no_orders_skips_the_cancellation_rule() {
        let history = CustomerHistory {
            completed_orders: 0,
            canceled_orders: 0,
            late_payments: 0,
            total_spent: 0,
            account_age_days: 5,
        };

        let assessment = RiskScorer::new().assess(&history);
        assert_eq!(assessment.risk_score, 1);
        assert_eq!(assessment.factors, vec!["new customer"]);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn medium_band_produces_two_actions() {
        let history = CustomerHistory {
            completed_orders: 1,
            canceled_orders: 4,
            late_payments: 1,
            ..clean_history()
        };

        let assessment = RiskScorer::new().assess(&history);
        assert_eq!(assessment.risk_score, 3);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(
            assessment.recommended_actions,
            vec![
                "consider requesting prepayment",
                "provide a detailed written quote"
            ]
        );
    }
}
