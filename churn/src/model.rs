use serde::{Deserialize, Serialize};
use std::error::Error;
use strum_macros::Display as EnumDisplay;

pub type GenericError = Box<dyn Error + Send + Sync>;

/// Upper bound on a plausible customer age; anything above is rejected
/// before scoring.
pub const MAX_AGE: u32 = 120;

/// Probability at or above which a customer lands in the HIGH tier.
pub const HIGH_RISK_THRESHOLD: f64 = 0.70;

/// Probability at or above which a customer lands in the MEDIUM tier.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.40;

/// A well-typed profile that is still semantically malformed.
///
/// Raised before scoring begins; scoring itself cannot fail once a profile
/// passes validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("age {0} is outside the expected range 0..={MAX_AGE}")]
    AgeOutOfRange(u32),

    #[error("{field} must be a non-negative finite amount, got {value}")]
    InvalidCharge { field: &'static str, value: f64 },
}

/// Contract terms recognized by the scoring rules.
///
/// Unrecognized vocabulary is preserved verbatim in `Other` and contributes
/// nothing to the risk score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractType {
    MonthToMonth,
    OneYear,
    TwoYear,
    Other(String),
}

impl From<String> for ContractType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Month-to-month" => ContractType::MonthToMonth,
            "One year" => ContractType::OneYear,
            "Two year" => ContractType::TwoYear,
            _ => ContractType::Other(value),
        }
    }
}

impl From<ContractType> for String {
    fn from(value: ContractType) -> Self {
        match value {
            ContractType::MonthToMonth => "Month-to-month".to_string(),
            ContractType::OneYear => "One year".to_string(),
            ContractType::TwoYear => "Two year".to_string(),
            ContractType::Other(other) => other,
        }
    }
}

/// Payment methods recognized by the scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    ElectronicCheck,
    MailedCheck,
    BankTransfer,
    CreditCard,
    Other(String),
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Electronic check" => PaymentMethod::ElectronicCheck,
            "Mailed check" => PaymentMethod::MailedCheck,
            "Bank transfer" => PaymentMethod::BankTransfer,
            "Credit card" => PaymentMethod::CreditCard,
            _ => PaymentMethod::Other(value),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::ElectronicCheck => "Electronic check".to_string(),
            PaymentMethod::MailedCheck => "Mailed check".to_string(),
            PaymentMethod::BankTransfer => "Bank transfer".to_string(),
            PaymentMethod::CreditCard => "Credit card".to_string(),
            PaymentMethod::Other(other) => other,
        }
    }
}

/// Yes/No subscription flag. The source data also carries values like
/// "No internet service", which land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceFlag {
    Yes,
    No,
    Other(String),
}

impl From<String> for ServiceFlag {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Yes" => ServiceFlag::Yes,
            "No" => ServiceFlag::No,
            _ => ServiceFlag::Other(value),
        }
    }
}

impl From<ServiceFlag> for String {
    fn from(value: ServiceFlag) -> Self {
        match value {
            ServiceFlag::Yes => "Yes".to_string(),
            ServiceFlag::No => "No".to_string(),
            ServiceFlag::Other(other) => other,
        }
    }
}

/// A customer profile as submitted for assessment. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub gender: String,
    pub age: u32,
    pub tenure: u32,
    pub monthly_charges: f64,
    pub total_charges: f64,
    pub internet_service: String,
    pub contract: ContractType,
    pub payment_method: PaymentMethod,
    pub paperless_billing: String,
    pub tech_support: ServiceFlag,
    pub online_backup: String,
}

impl CustomerProfile {
    /// Semantic checks on a profile that already deserialized cleanly.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age > MAX_AGE {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        for (field, value) in [
            ("monthly_charges", self.monthly_charges),
            ("total_charges", self.total_charges),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidCharge { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumDisplay)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

const HIGH_RISK_ACTIONS: [&str; 4] = [
    "Immediate retention call required",
    "Offer loyalty discount (15-25%)",
    "Assign dedicated account manager",
    "Consider contract upgrade incentives",
];

const MEDIUM_RISK_ACTIONS: [&str; 4] = [
    "Schedule proactive customer check-in",
    "Send satisfaction survey",
    "Consider service upgrade offers",
    "Provide usage optimization tips",
];

const LOW_RISK_ACTIONS: [&str; 4] = [
    "Continue regular service",
    "Consider upselling opportunities",
    "Monitor for usage pattern changes",
    "Maintain excellent service quality",
];

impl RiskLevel {
    /// Tier assignment, evaluated high to low, first match wins.
    pub fn for_probability(probability: f64) -> Self {
        if probability >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if probability >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Fixed retention playbook for the tier, stable across calls.
    pub fn recommendations(self) -> [&'static str; 4] {
        match self {
            RiskLevel::High => HIGH_RISK_ACTIONS,
            RiskLevel::Medium => MEDIUM_RISK_ACTIONS,
            RiskLevel::Low => LOW_RISK_ACTIONS,
        }
    }
}

/// A single triggered scoring rule and the weight it contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub name: String,
    pub weight: f64,
}

/// The full assessment for one profile, computed fresh per request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub churn_probability: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}
