//! Common error handling utilities for the ClaimsDesk engine
//!
//! This crate provides the error type, error codes and logging helper shared
//! by the pricing and coverage services. Service crates define their own
//! domain errors and wrap [`ClaimsDeskError`] for anything that comes from
//! the entity store or the environment.
//!
//! # Error Categories
//!
//! - **DatabaseError**: Entity store reads that failed
//! - **NotFound**: A record that must exist is missing
//! - **ValidationError**: Malformed input records
//! - **ConfigError**: Configuration loading and validation
//! - **ExternalError**: Upstream data sources other than the store
//! - **InternalError**: Anything else
//!
//! [`Language`] lives here as well: every user-facing message the services
//! produce is bilingual (English and Hebrew).
//!
//! # Example
//!
//! ```rust
//! use error_common::{ClaimsDeskError, Result};
//!
//! fn require_code(code: &str) -> Result<&str> {
//!     if code.trim().is_empty() {
//!         return Err(ClaimsDeskError::ValidationError(
//!             "internal code cannot be empty".to_string(),
//!         ));
//!     }
//!     Ok(code)
//! }
//!
//! assert!(require_code("").is_err());
//! assert_eq!(require_code("SURG-001").unwrap(), "SURG-001");
//! ```

pub mod types;
pub mod codes;
pub mod reporting;
pub mod locale;

pub use types::*;
pub use reporting::*;
pub use locale::*;
