use std::path::{Path, PathBuf};

use error_common::Language;
use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::ClaimsDeskConfig;

/// Prefix of environment overrides, nested keys separated by `__`
pub const ENV_PREFIX: &str = "CLAIMSDESK_";

/// Builder for the layered configuration: defaults, then an optional
/// file, then environment variables.
#[derive(Debug, Default)]
pub struct ConfigEngine {
    file: Option<PathBuf>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a YAML (`.yaml`/`.yml`) or TOML (`.toml`) file layer
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Merge all layers, extract and validate the configuration
    pub fn load(&self) -> Result<ClaimsDeskConfig> {
        let mut figment = Figment::from(Serialized::defaults(ClaimsDeskConfig::default()));

        if let Some(path) = &self.file {
            figment = figment.merge(file_provider(path)?);
        }

        let config: ClaimsDeskConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        validate(&config)?;
        debug!(
            currency = %config.pricing.default_currency,
            language = %config.coverage.default_language,
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn file_provider(path: &Path) -> Result<Figment> {
    if !path.exists() {
        return Err(ConfigError::SourceNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "yaml" | "yml" => Ok(Figment::from(Yaml::file(path))),
        "toml" => Ok(Figment::from(Toml::file(path))),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

/// Reject configurations the services cannot run with
pub fn validate(config: &ClaimsDeskConfig) -> Result<()> {
    if config.pricing.default_currency.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "pricing.default_currency cannot be empty".to_string(),
        ));
    }

    if let Err(e) = config.coverage.default_language.parse::<Language>() {
        return Err(ConfigError::ValidationError(format!(
            "coverage.default_language: {}",
            e
        )));
    }

    if !config.logging.is_known_level() {
        return Err(ConfigError::ValidationError(format!(
            "logging.level '{}' is not a known level",
            config.logging.level
        )));
    }

    Ok(())
}
