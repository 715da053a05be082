pub mod rule_based;

pub use rule_based::*;

use crate::model::{CustomerProfile, RiskAssessment};

/// Seam between the serving surface and a concrete scoring policy.
///
/// Implementations must be pure: no I/O, no shared mutable state, the same
/// profile always yields the same assessment.
pub trait RiskScorer: Send + Sync {
    fn assess(&self, profile: &CustomerProfile) -> RiskAssessment;
}
