use crate::{
    model::{
        ContractType, CustomerProfile, PaymentMethod, RiskAssessment, RiskLevel, RuleHit,
        ServiceFlag,
    },
    scorers::RiskScorer,
};

/// Hard ceiling on the reported churn probability.
pub const MAX_CHURN_PROBABILITY: f64 = 0.95;

type Rule = Box<dyn Fn(&CustomerProfile) -> Option<RuleHit> + Send + Sync>;

/// Additive rule-based churn scorer.
///
/// Each rule inspects the profile independently and yields a non-negative
/// weight when triggered; the churn probability is the capped sum of the
/// triggered weights. Rules are evaluated in registration order, and there
/// is no short-circuiting between them.
pub struct RuleBasedScorer {
    rules: Vec<Rule>,
}

impl RuleBasedScorer {
    pub fn new() -> Self {
        let mut scorer = RuleBasedScorer { rules: Vec::new() };
        scorer.add_default_rules();
        scorer
    }

    fn add_rule(
        &mut self,
        rule: impl Fn(&CustomerProfile) -> Option<RuleHit> + Send + Sync + 'static,
    ) {
        self.rules.push(Box::new(rule));
    }

    fn add_default_rules(&mut self) {
        // Customers at either end of the age range churn more often
        self.add_rule(|profile| {
            if profile.age < 30 || profile.age > 65 {
                return Some(RuleHit {
                    name: "Age outside core bracket".to_string(),
                    weight: 0.20,
                });
            }
            None
        });

        // New customers are the most likely to leave
        self.add_rule(|profile| {
            if profile.tenure < 12 {
                Some(RuleHit {
                    name: "Tenure under one year".to_string(),
                    weight: 0.30,
                })
            } else if profile.tenure < 24 {
                Some(RuleHit {
                    name: "Tenure under two years".to_string(),
                    weight: 0.10,
                })
            } else {
                None
            }
        });

        self.add_rule(|profile| match profile.contract {
            ContractType::MonthToMonth => Some(RuleHit {
                name: "Month-to-month contract".to_string(),
                weight: 0.40,
            }),
            ContractType::OneYear => Some(RuleHit {
                name: "One year contract".to_string(),
                weight: 0.10,
            }),
            _ => None,
        });

        self.add_rule(|profile| {
            if profile.payment_method == PaymentMethod::ElectronicCheck {
                return Some(RuleHit {
                    name: "Pays by electronic check".to_string(),
                    weight: 0.20,
                });
            }
            None
        });

        // Both ends of the monthly charge range are riskier than the middle
        self.add_rule(|profile| {
            if profile.monthly_charges > 80.0 {
                Some(RuleHit {
                    name: "High monthly charges".to_string(),
                    weight: 0.15,
                })
            } else if profile.monthly_charges < 30.0 {
                Some(RuleHit {
                    name: "Low monthly charges".to_string(),
                    weight: 0.10,
                })
            } else {
                None
            }
        });

        self.add_rule(|profile| {
            if profile.tech_support == ServiceFlag::No {
                return Some(RuleHit {
                    name: "No tech support".to_string(),
                    weight: 0.10,
                });
            }
            None
        });
    }

    /// Run every rule against the profile, in registration order.
    pub fn triggered_rules(&self, profile: &CustomerProfile) -> Vec<RuleHit> {
        self.rules.iter().filter_map(|rule| rule(profile)).collect()
    }
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 4 decimal places, half away from zero (`f64::round` semantics).
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl RiskScorer for RuleBasedScorer {
    fn assess(&self, profile: &CustomerProfile) -> RiskAssessment {
        let raw_score: f64 = self
            .triggered_rules(profile)
            .iter()
            .map(|hit| hit.weight)
            .sum();
        // Every rule weight is non-negative, so the floor of zero is
        // structural. A negative sum means a rule broke that contract.
        debug_assert!(raw_score >= 0.0, "rule weights must be non-negative");

        let churn_probability = raw_score.min(MAX_CHURN_PROBABILITY);
        let risk_level = RiskLevel::for_probability(churn_probability);
        let confidence = (churn_probability - 0.5).abs() * 2.0;

        RiskAssessment {
            churn_probability: round4(churn_probability),
            risk_level,
            confidence: round4(confidence),
            recommendations: risk_level
                .recommendations()
                .iter()
                .map(|action| action.to_string())
                .collect(),
        }
    }
}
