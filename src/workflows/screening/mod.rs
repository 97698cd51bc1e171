//! Customer intake normalization and order-history risk scoring.

pub mod domain;
mod intake;
mod risk;

pub use domain::{CustomerHistory, CustomerRecord, RiskAssessment, RiskLevel};
pub use intake::{CustomerIntake, IntakeViolation};
pub use risk::RiskScorer;
