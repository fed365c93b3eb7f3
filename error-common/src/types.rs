use thiserror::Error;

use crate::codes;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum ClaimsDeskError {
    /// Entity store read failures
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A record that must exist is missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// External service errors
    #[error("External service error: {0}")]
    ExternalError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClaimsDeskError {
    /// Stable code for API responses and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => codes::database::QUERY_FAILED,
            Self::NotFound(_) => codes::database::RECORD_NOT_FOUND,
            Self::ValidationError(_) => codes::validation::INVALID_INPUT,
            Self::ConfigError(_) => codes::configuration::INVALID_CONFIG,
            Self::ExternalError(_) => codes::system::EXTERNAL_FAILURE,
            Self::InternalError(_) | Self::Other(_) => codes::system::INTERNAL,
        }
    }

    /// Short category label used in structured log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => "database",
            Self::NotFound(_) => "not_found",
            Self::ValidationError(_) => "validation",
            Self::ConfigError(_) => "configuration",
            Self::ExternalError(_) => "external",
            Self::InternalError(_) | Self::Other(_) => "internal",
        }
    }
}

/// Result type alias for ClaimsDesk operations
pub type Result<T> = std::result::Result<T, ClaimsDeskError>;
