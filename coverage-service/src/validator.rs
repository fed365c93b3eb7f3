use error_common::Language;
use rust_decimal::Decimal;

use crate::messages;
use crate::models::{
    CoverageStatus, InsurancePolicy, RequestDetails, ServiceType, ValidationFinding,
    ValidationResult,
};

/// Evaluate whether `policy` covers the requested procedures, diagnoses
/// and services.
///
/// Rules run in a fixed order (activity, procedure exclusions, diagnosis
/// exclusions, implantables, private doctor, hospitalization days, cost
/// limit) and each may append one finding. The overall status starts at
/// `valid` and only ever escalates. A missing policy yields a single
/// "Policy Not Found" error and nothing else is evaluated.
///
/// `language` selects `status_text`; findings always carry both languages.
pub fn validate_policy_coverage(
    policy: Option<&InsurancePolicy>,
    procedure_codes: &[String],
    diagnosis_codes: &[String],
    request: &RequestDetails,
    language: Language,
) -> ValidationResult {
    let Some(policy) = policy else {
        return build_result(
            CoverageStatus::Error,
            vec![messages::policy_not_found()],
            language,
        );
    };

    let mut status = CoverageStatus::Valid;
    let mut results = Vec::new();
    let mut push = |finding: ValidationFinding| {
        status = status.escalate(finding.status);
        results.push(finding);
    };

    if policy.is_active {
        push(messages::active_policy(&policy.policy_number));
    } else {
        push(messages::inactive_policy());
    }

    let excluded = excluded_codes(procedure_codes, &policy.excluded_procedures);
    if !excluded.is_empty() {
        push(messages::excluded_procedures(&excluded.join(", ")));
    } else if !procedure_codes.is_empty() {
        push(messages::procedures_covered());
    }

    // Diagnoses only report exclusions; there is no "covered" finding.
    let excluded = excluded_codes(diagnosis_codes, &policy.excluded_diagnoses);
    if !excluded.is_empty() {
        push(messages::excluded_diagnoses(&excluded.join(", ")));
    }

    if request.has_implantables {
        if policy.allows_implantables {
            push(messages::implantables_covered());
        } else {
            push(messages::implantables_not_covered());
        }
    }

    if request.has_private_doctor {
        if policy.allows_private_doctor {
            push(messages::private_doctor_covered());
        } else {
            push(messages::private_doctor_not_covered());
        }
    }

    if let Some(requested) = request.hospitalization_days.filter(|days| *days > 0) {
        let limit = policy.hospital_days_limit.unwrap_or(0);
        if limit > 0 {
            if requested > limit {
                push(messages::hospital_days_exceeded(requested, limit));
            } else {
                push(messages::hospital_days_within_limit(limit - requested, limit));
            }
        }
    }

    let estimated_cost = request.estimated_cost.filter(|cost| !cost.is_zero());
    let service_type = request.service_type.as_deref().filter(|tag| !tag.is_empty());
    if let (Some(cost), Some(tag)) = (estimated_cost, service_type) {
        if let Some(service_type) = ServiceType::from_tag(tag) {
            let limit = service_type.coverage_limit(policy);
            if limit > Decimal::ZERO && cost > limit {
                push(messages::coverage_limit_exceeded(service_type, cost, limit));
            }
        }
    }

    build_result(status, results, language)
}

/// Requested codes that appear in `excluded`, in request order
fn excluded_codes<'a>(requested: &'a [String], excluded: &[String]) -> Vec<&'a str> {
    requested
        .iter()
        .filter(|code| excluded.contains(*code))
        .map(String::as_str)
        .collect()
}

fn build_result(
    overall_status: CoverageStatus,
    results: Vec<ValidationFinding>,
    language: Language,
) -> ValidationResult {
    let (text_en, text_he) = messages::status_text(overall_status);
    let with_status = |status: CoverageStatus| -> Vec<ValidationFinding> {
        results.iter().filter(|f| f.status == status).cloned().collect()
    };

    ValidationResult {
        overall_status,
        status_text: language.pick(text_en, text_he).to_string(),
        status_text_he: text_he.to_string(),
        warnings: with_status(CoverageStatus::Warning),
        errors: with_status(CoverageStatus::Error),
        valid: with_status(CoverageStatus::Valid),
        results,
    }
}
