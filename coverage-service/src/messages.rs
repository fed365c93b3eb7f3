// Bilingual texts of every coverage finding
use rust_decimal::Decimal;

use crate::models::{CoverageStatus, ServiceType, ValidationFinding};

fn finding(
    status: CoverageStatus,
    title: &str,
    title_he: &str,
    message: String,
    message_he: String,
) -> ValidationFinding {
    ValidationFinding {
        status,
        title: title.to_string(),
        title_he: title_he.to_string(),
        message,
        message_he,
    }
}

/// Overall status label as (English, Hebrew)
pub fn status_text(status: CoverageStatus) -> (&'static str, &'static str) {
    match status {
        CoverageStatus::Valid => ("Covered", "מכוסה"),
        CoverageStatus::Warning => ("Partially Covered", "מכוסה חלקית"),
        CoverageStatus::Error => ("Not Covered", "לא מכוסה"),
    }
}

fn service_name(service_type: ServiceType) -> (&'static str, &'static str) {
    match service_type {
        ServiceType::Hospital => ("hospitalization", "אשפוז"),
        ServiceType::Surgery => ("surgery", "ניתוחים"),
        ServiceType::Outpatient => ("outpatient", "אמבולטורי"),
    }
}

pub fn policy_not_found() -> ValidationFinding {
    finding(
        CoverageStatus::Error,
        "Policy Not Found",
        "פוליסה לא נמצאה",
        "No insurance policy was found for this request".to_string(),
        "לא נמצאה פוליסת ביטוח עבור בקשה זו".to_string(),
    )
}

pub fn inactive_policy() -> ValidationFinding {
    finding(
        CoverageStatus::Error,
        "Inactive Policy",
        "פוליסה לא פעילה",
        "The insurance policy is not active".to_string(),
        "פוליסת הביטוח אינה פעילה".to_string(),
    )
}

pub fn active_policy(policy_number: &str) -> ValidationFinding {
    finding(
        CoverageStatus::Valid,
        "Active Policy",
        "פוליסה פעילה",
        format!("Policy {} is active", policy_number),
        format!("פוליסה {} פעילה", policy_number),
    )
}

pub fn excluded_procedures(codes: &str) -> ValidationFinding {
    finding(
        CoverageStatus::Error,
        "Excluded Procedures",
        "פרוצדורות מוחרגות",
        format!("The following procedures are excluded from the policy: {}", codes),
        format!("הפרוצדורות הבאות מוחרגות מהפוליסה: {}", codes),
    )
}

pub fn procedures_covered() -> ValidationFinding {
    finding(
        CoverageStatus::Valid,
        "Procedures Covered",
        "פרוצדורות מכוסות",
        "All requested procedures are covered by the policy".to_string(),
        "כל הפרוצדורות המבוקשות מכוסות בפוליסה".to_string(),
    )
}

pub fn excluded_diagnoses(codes: &str) -> ValidationFinding {
    finding(
        CoverageStatus::Error,
        "Excluded Diagnoses",
        "אבחנות מוחרגות",
        format!("The following diagnoses are excluded from the policy: {}", codes),
        format!("האבחנות הבאות מוחרגות מהפוליסה: {}", codes),
    )
}

pub fn implantables_not_covered() -> ValidationFinding {
    finding(
        CoverageStatus::Error,
        "Implantables Not Covered",
        "שתלים אינם מכוסים",
        "The policy does not cover implantables".to_string(),
        "הפוליסה אינה מכסה שתלים".to_string(),
    )
}

pub fn implantables_covered() -> ValidationFinding {
    finding(
        CoverageStatus::Valid,
        "Implantables Covered",
        "שתלים מכוסים",
        "The policy covers implantables".to_string(),
        "הפוליסה מכסה שתלים".to_string(),
    )
}

pub fn private_doctor_not_covered() -> ValidationFinding {
    finding(
        CoverageStatus::Error,
        "Private Doctor Not Covered",
        "רופא פרטי אינו מכוסה",
        "The policy does not cover a private doctor".to_string(),
        "הפוליסה אינה מכסה בחירת רופא פרטי".to_string(),
    )
}

pub fn private_doctor_covered() -> ValidationFinding {
    finding(
        CoverageStatus::Valid,
        "Private Doctor Covered",
        "רופא פרטי מכוסה",
        "The policy covers a private doctor".to_string(),
        "הפוליסה מכסה בחירת רופא פרטי".to_string(),
    )
}

pub fn hospital_days_exceeded(requested: u32, limit: u32) -> ValidationFinding {
    finding(
        CoverageStatus::Warning,
        "Hospitalization Days Exceeded",
        "חריגה מימי אשפוז",
        format!(
            "Requested {} hospitalization days exceed the policy limit of {} days",
            requested, limit
        ),
        format!(
            "{} ימי האשפוז המבוקשים חורגים ממגבלת הפוליסה של {} ימים",
            requested, limit
        ),
    )
}

pub fn hospital_days_within_limit(remaining: u32, limit: u32) -> ValidationFinding {
    finding(
        CoverageStatus::Valid,
        "Hospitalization Days Covered",
        "ימי אשפוז מכוסים",
        format!(
            "{} of {} hospitalization days remain after this request",
            remaining, limit
        ),
        format!("נותרו {} מתוך {} ימי אשפוז לאחר בקשה זו", remaining, limit),
    )
}

pub fn coverage_limit_exceeded(
    service_type: ServiceType,
    estimated_cost: Decimal,
    limit: Decimal,
) -> ValidationFinding {
    let (name, name_he) = service_name(service_type);
    finding(
        CoverageStatus::Warning,
        "Coverage Limit Exceeded",
        "חריגה מתקרת הכיסוי",
        format!(
            "Estimated cost {} exceeds the {} coverage limit of {}",
            estimated_cost, name, limit
        ),
        format!(
            "העלות המשוערת {} חורגת מתקרת כיסוי ה{} של {}",
            estimated_cost, name_he, limit
        ),
    )
}
