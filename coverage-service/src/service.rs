use std::sync::Arc;

use async_trait::async_trait;
use error_common::{log_error, Language};
use logger_redacted::PiiRedactor;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::CoverageResult;
use crate::models::{CoverageRequest, CoverageStatus, InsurancePolicy, ValidationResult};
use crate::validator::validate_policy_coverage;

/// Read side of the policy records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Policy with this number, if any
    async fn policy_by_number(&self, policy_number: &str) -> error_common::Result<Option<InsurancePolicy>>;
}

/// In-memory policy store for development/testing
#[derive(Default)]
pub struct InMemoryPolicyStore {
    policies: RwLock<Vec<InsurancePolicy>>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(policies: Vec<InsurancePolicy>) -> Self {
        Self {
            policies: RwLock::new(policies),
        }
    }

    pub async fn insert_policy(&self, policy: InsurancePolicy) {
        self.policies.write().await.push(policy);
    }
}

#[async_trait]
impl PolicyStore for InMemoryPolicyStore {
    async fn policy_by_number(&self, policy_number: &str) -> error_common::Result<Option<InsurancePolicy>> {
        let policies = self.policies.read().await;
        Ok(policies
            .iter()
            .find(|p| p.policy_number == policy_number)
            .cloned())
    }
}

/// Coverage checks against stored policies
pub struct CoverageService {
    store: Arc<dyn PolicyStore>,
    redactor: PiiRedactor,
}

impl CoverageService {
    /// Create a new coverage service
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self {
            store,
            redactor: PiiRedactor::default(),
        }
    }

    /// Redactor applied to policy numbers in log output
    pub fn with_redactor(mut self, redactor: PiiRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    /// Look up `policy_number` and validate `request` against it.
    /// An unknown policy produces the "Policy Not Found" result.
    ///
    /// # Errors
    ///
    /// Returns `CoverageError::Store` when the policy lookup fails.
    pub async fn check_coverage(
        &self,
        policy_number: &str,
        request: &CoverageRequest,
        language: Language,
    ) -> CoverageResult<ValidationResult> {
        let masked = self.redactor.mask_identifier(policy_number);
        let policy = self
            .store
            .policy_by_number(policy_number)
            .await
            .inspect_err(|err| {
                log_error("coverage.policy_lookup", err, |text| self.redactor.redact(text));
            })?;
        if policy.is_none() {
            warn!(policy = %masked, "Policy not found");
        }

        let result = validate_policy_coverage(
            policy.as_ref(),
            &request.procedure_codes,
            &request.diagnosis_codes,
            &request.details,
            language,
        );

        info!(
            policy = %masked,
            status = ?result.overall_status,
            findings = result.results.len(),
            "Coverage validated"
        );
        Ok(result)
    }

    /// Whether the request is fully covered
    ///
    /// # Errors
    ///
    /// Same as [`CoverageService::check_coverage`].
    pub async fn is_covered(&self, policy_number: &str, request: &CoverageRequest) -> CoverageResult<bool> {
        let result = self.check_coverage(policy_number, request, Language::En).await?;
        Ok(result.overall_status == CoverageStatus::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverageError;
    use crate::models::RequestDetails;
    use error_common::ClaimsDeskError;

    fn policy(number: &str) -> InsurancePolicy {
        InsurancePolicy {
            policy_number: number.to_string(),
            is_active: true,
            allows_implantables: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_check_coverage_against_stored_policy() {
        let store = InMemoryPolicyStore::new();
        store.insert_policy(policy("POL-1")).await;
        let service = CoverageService::new(Arc::new(store));

        let request = CoverageRequest {
            procedure_codes: vec!["P1".to_string()],
            details: RequestDetails {
                has_implantables: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = service.check_coverage("POL-1", &request, Language::He).await.unwrap();
        assert_eq!(result.overall_status, CoverageStatus::Valid);
        assert_eq!(result.results.len(), 3);
        assert_eq!(result.status_text, "מכוסה");
        assert!(service.is_covered("POL-1", &request).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_policy_is_not_found_result() {
        let service = CoverageService::new(Arc::new(InMemoryPolicyStore::new()));

        let result = service
            .check_coverage("POL-404", &CoverageRequest::default(), Language::En)
            .await
            .unwrap();
        assert_eq!(result.overall_status, CoverageStatus::Error);
        assert_eq!(result.results[0].title, "Policy Not Found");
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockPolicyStore::new();
        store
            .expect_policy_by_number()
            .withf(|number| number == "POL-1")
            .times(1)
            .returning(|_| Err(ClaimsDeskError::DatabaseError("timeout".to_string())));
        let service = CoverageService::new(Arc::new(store));

        let err = service
            .check_coverage("POL-1", &CoverageRequest::default(), Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, CoverageError::Store(ClaimsDeskError::DatabaseError(_))));
        assert_eq!(err.code(), "DB_4002");
    }
}
