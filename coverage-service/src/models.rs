use serde::{Deserialize, Deserializer, Serialize};
use rust_decimal::Decimal;

/// Insurance policy, reduced to the fields coverage validation reads.
/// Absent fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsurancePolicy {
    pub policy_number: String,
    pub is_active: bool,
    pub excluded_procedures: Vec<String>,
    pub excluded_diagnoses: Vec<String>,
    pub allows_implantables: bool,
    pub allows_private_doctor: bool,
    pub hospital_days_limit: Option<u32>,
    pub hospital_coverage_amount: Option<Decimal>,
    pub surgery_coverage_amount: Option<Decimal>,
    pub outpatient_coverage_amount: Option<Decimal>,
}

/// Service category a cost estimate is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Hospital,
    Surgery,
    Outpatient,
}

impl ServiceType {
    /// Recognised service type tags; anything else has no coverage limit
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hospital" => Some(ServiceType::Hospital),
            "surgery" => Some(ServiceType::Surgery),
            "outpatient" => Some(ServiceType::Outpatient),
            _ => None,
        }
    }

    /// Coverage amount of `policy` for this service type, zero when unset
    pub fn coverage_limit(self, policy: &InsurancePolicy) -> Decimal {
        let amount = match self {
            ServiceType::Hospital => policy.hospital_coverage_amount,
            ServiceType::Surgery => policy.surgery_coverage_amount,
            ServiceType::Outpatient => policy.outpatient_coverage_amount,
        };
        amount.unwrap_or_default()
    }
}

/// Request flags and amounts checked against the policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestDetails {
    pub has_implantables: bool,
    pub has_private_doctor: bool,
    /// Number or numeric string. Fractions are truncated; negative or
    /// unparsable values count as not requested.
    #[serde(deserialize_with = "lenient_days")]
    pub hospitalization_days: Option<u32>,
    pub estimated_cost: Option<Decimal>,
    pub service_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DaysInput {
    Whole(i64),
    Fraction(f64),
    Text(String),
}

fn lenient_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let days = Option::<DaysInput>::deserialize(deserializer)?;
    Ok(days.and_then(|days| match days {
        DaysInput::Whole(n) => u32::try_from(n).ok(),
        DaysInput::Fraction(f) => whole_days(f),
        DaysInput::Text(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .and_then(|n| u32::try_from(n).ok())
                .or_else(|| text.parse::<f64>().ok().and_then(whole_days))
        }
    }))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_days(days: f64) -> Option<u32> {
    (days.is_finite() && days >= 0.0 && days <= f64::from(u32::MAX)).then(|| days.trunc() as u32)
}

/// Outcome of a single rule, and the overall outcome of a validation.
///
/// Ordered by severity: `Valid < Warning < Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    #[default]
    Valid,
    Warning,
    Error,
}

impl CoverageStatus {
    /// Raise to `other` if it is more severe; never lowers
    pub fn escalate(self, other: CoverageStatus) -> CoverageStatus {
        self.max(other)
    }
}

/// One bilingual finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFinding {
    pub status: CoverageStatus,
    pub title: String,
    pub title_he: String,
    pub message: String,
    pub message_he: String,
}

/// Findings in evaluation order with the overall status and filtered views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub overall_status: CoverageStatus,
    pub status_text: String,
    pub status_text_he: String,
    pub results: Vec<ValidationFinding>,
    pub warnings: Vec<ValidationFinding>,
    pub errors: Vec<ValidationFinding>,
    pub valid: Vec<ValidationFinding>,
}

/// Codes and details of one coverage check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverageRequest {
    pub procedure_codes: Vec<String>,
    pub diagnosis_codes: Vec<String>,
    pub details: RequestDetails,
}
