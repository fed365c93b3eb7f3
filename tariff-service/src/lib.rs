//! Tariff Service for Provider Pricing
//!
//! Prices a procedure for a provider under its contract:
//! - Tariff lookup by provider and internal procedure code
//! - Contract scope-rule resolution (exact code, catalog prefix, catch-all)
//! - Fee layering for doctor, implantable and consumable components not
//!   covered by the matched rule
//! - Entity store seam with an in-memory implementation

pub mod resolver;
pub mod models;
pub mod pricing;
pub mod scope;
pub mod store;
pub mod error;

pub use resolver::*;
pub use models::*;
pub use pricing::*;
pub use scope::*;
pub use store::*;
pub use error::*;
