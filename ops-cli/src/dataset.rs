use std::path::Path;

use anyhow::{bail, Context, Result};
use coverage_service::{InMemoryPolicyStore, InsurancePolicy};
use serde::{Deserialize, Serialize};
use tariff_service::{Contract, DoctorContract, InMemoryEntityStore, Tariff};

/// Records exported from the admin application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub contracts: Vec<Contract>,
    pub tariffs: Vec<Tariff>,
    pub doctor_contracts: Vec<DoctorContract>,
    pub policies: Vec<InsurancePolicy>,
}

impl Dataset {
    /// Load a YAML (`.yaml`/`.yml`) or JSON (`.json`) dataset file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let dataset = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML dataset {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON dataset {}", path.display()))?,
            other => bail!("Unsupported dataset format '{}': use .yaml, .yml or .json", other),
        };

        Ok(dataset)
    }

    pub fn entity_store(&self) -> InMemoryEntityStore {
        InMemoryEntityStore::from_records(
            self.contracts.clone(),
            self.tariffs.clone(),
            self.doctor_contracts.clone(),
        )
    }

    pub fn policy_store(&self) -> InMemoryPolicyStore {
        InMemoryPolicyStore::from_records(self.policies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_and_json() {
        let yaml = write_temp(
            "dataset.yaml",
            "policies:\n  - policy_number: POL-1\n    is_active: true\n",
        );
        let dataset = Dataset::load(&yaml).unwrap();
        assert_eq!(dataset.policies.len(), 1);
        assert!(dataset.tariffs.is_empty());

        let json = write_temp(
            "dataset.json",
            r#"{"tariffs":[{"provider_id":"6f1c2a52-8a3e-4c55-9d55-0b7a1f3e9a10","internal_code":"SURG-001","base_price":"1000"}]}"#,
        );
        let dataset = Dataset::load(&json).unwrap();
        assert_eq!(dataset.tariffs.len(), 1);
        assert!(dataset.policies.is_empty());

        std::fs::remove_file(yaml).ok();
        std::fs::remove_file(json).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        let path = write_temp("dataset.csv", "");
        let err = Dataset::load(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported dataset format"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/dataset.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }
}
