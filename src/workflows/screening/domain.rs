use serde::{Deserialize, Serialize};

/// Contact record as it arrives from the external store. Normalized as a
/// unit by [`CustomerIntake`]: either every field is cleaned up or the
/// record is rejected.
///
/// [`CustomerIntake`]: super::CustomerIntake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub postal_code: String,
    pub address: String,
}

/// Aggregated order behavior for one customer, read-only input to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerHistory {
    pub completed_orders: u32,
    pub canceled_orders: u32,
    pub late_payments: u32,
    pub total_spent: i64,
    pub account_age_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Handling guidance shown to the back-office operator for each level.
    pub const fn recommended_actions(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["proceed with standard handling"],
            Self::Medium => &[
                "consider requesting prepayment",
                "provide a detailed written quote",
            ],
            Self::High => &[
                "require prepayment",
                "require a detailed contract",
                "require manager approval",
            ],
        }
    }
}

/// Scored view of a customer's history. `factors` preserves rule evaluation
/// order so the audit trail reads the same way the score accrued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: Vec<String>,
    pub recommended_actions: Vec<String>,
}
