use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimsDeskConfig {
    pub pricing: PricingConfig,
    pub coverage: CoverageConfig,
    pub logging: LoggerConfig,
}

/// Price calculation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Currency reported when a tariff carries none
    pub default_currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_currency: "ILS".to_string(),
        }
    }
}

/// Coverage validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Language of the top-level status text (`en`, `he` or their
    /// long names)
    pub default_language: String,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
        }
    }
}
