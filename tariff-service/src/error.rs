use error_common::{codes, ClaimsDeskError, Language};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TariffError {
    #[error("No tariff found for code {internal_code} at provider {provider_id}")]
    TariffNotFound {
        provider_id: Uuid,
        internal_code: String,
    },

    #[error("No contract scope rule matches code {internal_code}")]
    NoMatchingScopeRule { internal_code: String },

    #[error("Price for code {internal_code} exceeds the supported amount range")]
    PriceOverflow { internal_code: String },

    #[error(transparent)]
    Store(#[from] ClaimsDeskError),
}

impl TariffError {
    pub fn code(&self) -> &'static str {
        match self {
            TariffError::TariffNotFound { .. } => codes::pricing::TARIFF_NOT_FOUND,
            TariffError::NoMatchingScopeRule { .. } => codes::pricing::NO_MATCHING_SCOPE_RULE,
            TariffError::PriceOverflow { .. } => codes::pricing::PRICE_OVERFLOW,
            TariffError::Store(err) => err.code(),
        }
    }

    /// Message shown to the user in `language`
    pub fn message(&self, language: Language) -> String {
        match (self, language) {
            (TariffError::TariffNotFound { internal_code, .. }, Language::En) => {
                format!("No tariff found for code {} at this provider", internal_code)
            }
            (TariffError::TariffNotFound { internal_code, .. }, Language::He) => {
                format!("לא נמצא תעריף לקוד {} אצל ספק זה", internal_code)
            }
            (TariffError::NoMatchingScopeRule { internal_code }, Language::En) => {
                format!("No contract scope rule applies to code {}", internal_code)
            }
            (TariffError::NoMatchingScopeRule { internal_code }, Language::He) => {
                format!("אין כלל היקף בהסכם החל על קוד {}", internal_code)
            }
            (TariffError::PriceOverflow { internal_code }, Language::En) => {
                format!("The price for code {} is too large to calculate", internal_code)
            }
            (TariffError::PriceOverflow { internal_code }, Language::He) => {
                format!("המחיר עבור קוד {} גדול מכדי לחשב אותו", internal_code)
            }
            (TariffError::Store(err), Language::En) => {
                format!("Could not load pricing data: {}", err)
            }
            (TariffError::Store(err), Language::He) => {
                format!("טעינת נתוני התמחור נכשלה: {}", err)
            }
        }
    }
}

pub type TariffResult<T> = Result<T, TariffError>;
