//! Configuration management for the ClaimsDesk engine
//!
//! Settings are layered in this order, later layers winning:
//!
//! - **Defaults**: compiled into [`ClaimsDeskConfig`]
//! - **Local file**: YAML or TOML, chosen by extension
//! - **Environment**: `CLAIMSDESK_` prefixed variables, nested with `__`
//!   (`CLAIMSDESK_PRICING__DEFAULT_CURRENCY=USD`)
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::ConfigEngine;
//!
//! let config = ConfigEngine::new().with_file("claimsdesk.yaml").load()?;
//! println!("Quoting in {}", config.pricing.default_currency);
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod engine;
pub mod settings;
pub mod error;

pub use engine::*;
pub use settings::*;
pub use error::*;
