//! Coverage Service for Insurance Policies
//!
//! Checks whether a policy covers a request:
//! - Policy activity
//! - Procedure and diagnosis exclusion lists
//! - Implantable and private-doctor entitlements
//! - Hospitalization day caps
//! - Per-service coverage limits (hospital, surgery, outpatient)
//!
//! Validation is advisory: it never fails, every outcome is a
//! [`ValidationResult`] with bilingual (English/Hebrew) findings.

pub mod service;
pub mod models;
pub mod messages;
pub mod validator;
pub mod error;

pub use service::*;
pub use models::*;
pub use validator::*;
pub use error::*;
