use async_trait::async_trait;
use error_common::Result;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Contract, DoctorContract, Tariff};

/// Read side of the entity persistence layer used by pricing.
///
/// Each lookup returns every matching record in storage order; callers take
/// the first one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Contracts signed with a provider
    async fn contracts_by_provider(&self, provider_id: Uuid) -> Result<Vec<Contract>>;

    /// Tariffs for one internal code at one provider
    async fn tariffs_by_code(&self, provider_id: Uuid, internal_code: &str) -> Result<Vec<Tariff>>;

    /// Fee agreements of a doctor
    async fn doctor_contracts_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<DoctorContract>>;
}

/// In-memory entity store for development/testing
#[derive(Default)]
pub struct InMemoryEntityStore {
    contracts: RwLock<Vec<Contract>>,
    tariffs: RwLock<Vec<Tariff>>,
    doctor_contracts: RwLock<Vec<DoctorContract>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with records, kept in the given order
    pub fn from_records(
        contracts: Vec<Contract>,
        tariffs: Vec<Tariff>,
        doctor_contracts: Vec<DoctorContract>,
    ) -> Self {
        Self {
            contracts: RwLock::new(contracts),
            tariffs: RwLock::new(tariffs),
            doctor_contracts: RwLock::new(doctor_contracts),
        }
    }

    pub async fn insert_contract(&self, contract: Contract) {
        self.contracts.write().await.push(contract);
    }

    pub async fn insert_tariff(&self, tariff: Tariff) {
        self.tariffs.write().await.push(tariff);
    }

    pub async fn insert_doctor_contract(&self, contract: DoctorContract) {
        self.doctor_contracts.write().await.push(contract);
    }

    /// Clear all records (for testing)
    pub async fn clear(&self) {
        self.contracts.write().await.clear();
        self.tariffs.write().await.clear();
        self.doctor_contracts.write().await.clear();
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn contracts_by_provider(&self, provider_id: Uuid) -> Result<Vec<Contract>> {
        let contracts = self.contracts.read().await;
        Ok(contracts
            .iter()
            .filter(|c| c.provider_id == provider_id)
            .cloned()
            .collect())
    }

    async fn tariffs_by_code(&self, provider_id: Uuid, internal_code: &str) -> Result<Vec<Tariff>> {
        let tariffs = self.tariffs.read().await;
        Ok(tariffs
            .iter()
            .filter(|t| t.provider_id == provider_id && t.internal_code == internal_code)
            .cloned()
            .collect())
    }

    async fn doctor_contracts_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<DoctorContract>> {
        let contracts = self.doctor_contracts.read().await;
        Ok(contracts
            .iter()
            .filter(|c| c.doctor_id == doctor_id)
            .cloned()
            .collect())
    }
}
