use std::sync::Arc;

use error_common::log_error;
use logger_redacted::PiiRedactor;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{TariffError, TariffResult};
use crate::models::{DoctorContract, PriceCalculationResult, PriceRequest};
use crate::pricing::price_with_rule;
use crate::scope::select_rule;
use crate::store::EntityStore;

/// Currency reported when neither the tariff nor the caller names one
pub const DEFAULT_CURRENCY: &str = "ILS";

/// Resolves the tariff and contract scope rule for a procedure and prices it
pub struct TariffResolver {
    store: Arc<dyn EntityStore>,
    default_currency: String,
    redactor: PiiRedactor,
}

impl TariffResolver {
    /// Create a new resolver over an entity store
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            store,
            default_currency: DEFAULT_CURRENCY.to_string(),
            redactor: PiiRedactor::default(),
        }
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Redactor applied to store error text before it is logged
    pub fn with_redactor(mut self, redactor: PiiRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    /// Price `request` under the provider's contract.
    ///
    /// The contract, tariff and doctor-contract lookups are independent and
    /// run concurrently; the first failing lookup aborts the calculation.
    ///
    /// # Errors
    ///
    /// `TariffNotFound` when the provider has no tariff for the code,
    /// `NoMatchingScopeRule` when no contract rule applies to it,
    /// `PriceOverflow` when the amounts leave the decimal range, and
    /// `Store` for lookup failures.
    #[instrument(
        skip(self, request),
        fields(provider_id = %request.provider_id, internal_code = %request.internal_code)
    )]
    pub async fn calculate_price(&self, request: &PriceRequest) -> TariffResult<PriceCalculationResult> {
        let (contracts, tariffs, doctor_contract) = tokio::try_join!(
            self.store.contracts_by_provider(request.provider_id),
            self.store.tariffs_by_code(request.provider_id, &request.internal_code),
            self.doctor_contract(request.doctor_id),
        )
        .inspect_err(|err| {
            log_error("pricing.lookup", err, |text| self.redactor.redact(text));
        })?;

        let tariff = tariffs.into_iter().next().ok_or_else(|| {
            warn!("No tariff for requested code");
            TariffError::TariffNotFound {
                provider_id: request.provider_id,
                internal_code: request.internal_code.clone(),
            }
        })?;

        let rules = contracts
            .first()
            .map(|contract| contract.scope_rules.as_slice())
            .unwrap_or_default();

        let rule = select_rule(rules, &request.internal_code).ok_or_else(|| {
            warn!(rules = rules.len(), "No scope rule matches requested code");
            TariffError::NoMatchingScopeRule {
                internal_code: request.internal_code.clone(),
            }
        })?;
        debug!(scope_type = ?rule.scope_type, "Scope rule selected");

        let result = price_with_rule(
            &tariff,
            rule,
            doctor_contract.as_ref(),
            request,
            &self.default_currency,
        )
        .inspect_err(|_| warn!(quantity = request.quantity, "Price exceeds the decimal range"))?;

        info!(
            final_price = %result.final_price,
            currency = %result.currency,
            "Price calculated"
        );
        Ok(result)
    }

    /// Convenience wrapper taking the request fields positionally
    ///
    /// # Errors
    ///
    /// Same as [`TariffResolver::calculate_price`].
    pub async fn quote(
        &self,
        provider_id: Uuid,
        doctor_id: Option<Uuid>,
        internal_code: &str,
        quantity: u32,
        implantable_required: bool,
    ) -> TariffResult<PriceCalculationResult> {
        let request = PriceRequest {
            provider_id,
            doctor_id,
            internal_code: internal_code.to_string(),
            quantity,
            implantable_required,
        };
        self.calculate_price(&request).await
    }

    async fn doctor_contract(&self, doctor_id: Option<Uuid>) -> error_common::Result<Option<DoctorContract>> {
        match doctor_id {
            Some(doctor_id) => Ok(self
                .store
                .doctor_contracts_by_doctor(doctor_id)
                .await?
                .into_iter()
                .next()),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contract, FeeStructure, PriceComponents, ScopeRule, ScopeType, Tariff};
    use crate::store::MockEntityStore;
    use error_common::ClaimsDeskError;
    use rust_decimal::Decimal;

    fn tariff(provider_id: Uuid) -> Tariff {
        Tariff {
            provider_id,
            internal_code: "SURG-001".to_string(),
            base_price: Decimal::from(1000),
            currency: None,
            price_components: PriceComponents::default(),
        }
    }

    fn all_rule() -> ScopeRule {
        ScopeRule {
            scope_type: ScopeType::All,
            code: None,
            catalog_path: None,
            includes_doctor_fee: false,
            includes_implantables: false,
            includes_consumables: false,
            includes_facility_fee: false,
        }
    }

    #[tokio::test]
    async fn test_doctor_lookup_skipped_without_doctor() {
        let provider = Uuid::new_v4();
        let mut store = MockEntityStore::new();
        store
            .expect_contracts_by_provider()
            .times(1)
            .returning(move |_| Ok(vec![Contract { provider_id: provider, scope_rules: vec![all_rule()] }]));
        store
            .expect_tariffs_by_code()
            .withf(|_, code| code == "SURG-001")
            .times(1)
            .returning(move |_, _| Ok(vec![tariff(provider)]));
        store.expect_doctor_contracts_by_doctor().never();

        let resolver = TariffResolver::new(Arc::new(store));
        let result = resolver
            .calculate_price(&PriceRequest::new(provider, "SURG-001"))
            .await
            .unwrap();

        assert_eq!(result.final_price, Decimal::from(1000));
        assert_eq!(result.currency, "ILS");
    }

    #[tokio::test]
    async fn test_first_doctor_contract_is_used() {
        let provider = Uuid::new_v4();
        let doctor = Uuid::new_v4();
        let mut store = MockEntityStore::new();
        store
            .expect_contracts_by_provider()
            .returning(move |_| Ok(vec![Contract { provider_id: provider, scope_rules: vec![all_rule()] }]));
        store
            .expect_tariffs_by_code()
            .returning(move |_, _| Ok(vec![tariff(provider)]));
        store
            .expect_doctor_contracts_by_doctor()
            .withf(move |id| *id == doctor)
            .times(1)
            .returning(move |_| {
                Ok(vec![
                    DoctorContract {
                        doctor_id: doctor,
                        fee_structure: FeeStructure::Percentage,
                        fee_value: Decimal::from(10),
                    },
                    DoctorContract {
                        doctor_id: doctor,
                        fee_structure: FeeStructure::Fixed,
                        fee_value: Decimal::from(999),
                    },
                ])
            });

        let resolver = TariffResolver::new(Arc::new(store)).with_default_currency("USD");
        let result = resolver
            .quote(provider, Some(doctor), "SURG-001", 1, false)
            .await
            .unwrap();

        assert_eq!(result.doctor_fee, Decimal::from(100));
        assert_eq!(result.final_price, Decimal::from(1100));
        assert_eq!(result.currency, "USD");
    }

    #[tokio::test]
    async fn test_missing_contract_means_no_rule() {
        let provider = Uuid::new_v4();
        let mut store = MockEntityStore::new();
        store.expect_contracts_by_provider().returning(|_| Ok(vec![]));
        store
            .expect_tariffs_by_code()
            .returning(move |_, _| Ok(vec![tariff(provider)]));

        let resolver = TariffResolver::new(Arc::new(store));
        let err = resolver
            .calculate_price(&PriceRequest::new(provider, "SURG-001"))
            .await
            .unwrap_err();

        assert!(matches!(err, TariffError::NoMatchingScopeRule { .. }));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let provider = Uuid::new_v4();
        let mut store = MockEntityStore::new();
        store
            .expect_contracts_by_provider()
            .returning(|_| Err(ClaimsDeskError::DatabaseError("connection reset".to_string())));
        store
            .expect_tariffs_by_code()
            .returning(move |_, _| Ok(vec![tariff(provider)]));

        let resolver = TariffResolver::new(Arc::new(store));
        let err = resolver
            .calculate_price(&PriceRequest::new(provider, "SURG-001"))
            .await
            .unwrap_err();

        assert!(matches!(err, TariffError::Store(ClaimsDeskError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_redaction_only_touches_the_log_line() {
        let provider = Uuid::new_v4();
        let mut store = MockEntityStore::new();
        store.expect_contracts_by_provider().returning(|_| {
            Err(ClaimsDeskError::DatabaseError("bad row for insured 012345678".to_string()))
        });
        store
            .expect_tariffs_by_code()
            .returning(move |_, _| Ok(vec![tariff(provider)]));

        let resolver = TariffResolver::new(Arc::new(store)).with_redactor(PiiRedactor::default());
        let err = resolver
            .calculate_price(&PriceRequest::new(provider, "SURG-001"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "DB_4002");
        assert!(err.to_string().contains("012345678"));
    }

    #[tokio::test]
    async fn test_overflowing_quantity_is_an_error() {
        let provider = Uuid::new_v4();
        let mut store = MockEntityStore::new();
        store
            .expect_contracts_by_provider()
            .returning(move |_| Ok(vec![Contract { provider_id: provider, scope_rules: vec![all_rule()] }]));
        store.expect_tariffs_by_code().returning(move |_, _| {
            Ok(vec![Tariff {
                base_price: Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0),
                ..tariff(provider)
            }])
        });

        let resolver = TariffResolver::new(Arc::new(store));
        let err = resolver
            .quote(provider, None, "SURG-001", u32::MAX, false)
            .await
            .unwrap_err();

        assert!(matches!(err, TariffError::PriceOverflow { .. }));
        assert_eq!(err.code(), "PRICING_1003");
    }
}
