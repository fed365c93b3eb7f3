use std::sync::Arc;

use anyhow::{anyhow, Result};
use config_engine::ClaimsDeskConfig;
use coverage_service::{CoverageRequest, CoverageService, RequestDetails, ValidationResult};
use error_common::Language;
use logger_redacted::redactor_for;
use tariff_service::{PriceCalculationResult, PriceRequest, TariffResolver};
use tracing::debug;

use crate::cli::{CoverageArgs, PriceArgs};
use crate::dataset::Dataset;

/// Quote a procedure price from the dataset
pub async fn price(
    args: &PriceArgs,
    dataset: &Dataset,
    config: &ClaimsDeskConfig,
    language: Language,
) -> Result<PriceCalculationResult> {
    let resolver = TariffResolver::new(Arc::new(dataset.entity_store()))
        .with_default_currency(config.pricing.default_currency.clone())
        .with_redactor(redactor_for(&config.logging));

    let mut request = PriceRequest::new(args.provider, args.code.clone())
        .with_quantity(args.quantity)
        .with_implantables(args.implantable);
    if let Some(doctor) = args.doctor {
        request = request.with_doctor(doctor);
    }
    debug!(?request, "Price request");

    resolver
        .calculate_price(&request)
        .await
        .map_err(|err| anyhow!("[{}] {}", err.code(), err.message(language)))
}

/// Validate a request against a policy from the dataset
pub async fn coverage(
    args: &CoverageArgs,
    dataset: &Dataset,
    config: &ClaimsDeskConfig,
    language: Language,
) -> Result<ValidationResult> {
    let service = CoverageService::new(Arc::new(dataset.policy_store()))
        .with_redactor(redactor_for(&config.logging));

    let request = CoverageRequest {
        procedure_codes: args.procedures.clone(),
        diagnosis_codes: args.diagnoses.clone(),
        details: RequestDetails {
            has_implantables: args.implantables,
            has_private_doctor: args.private_doctor,
            hospitalization_days: args.days,
            estimated_cost: args.cost,
            service_type: args.service_type.clone(),
        },
    };

    service
        .check_coverage(&args.policy, &request, language)
        .await
        .map_err(|err| anyhow!("[{}] {}", err.code(), err))
}
