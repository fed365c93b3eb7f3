use serde::{Deserialize, Serialize};
use uuid::Uuid;
use rust_decimal::Decimal;

/// Negotiated price for one procedure code at one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub provider_id: Uuid,
    pub internal_code: String,
    pub base_price: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub price_components: PriceComponents,
}

/// Fee components of a tariff; absent components are zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceComponents {
    pub facility_fee: Decimal,
    pub doctor_fee: Decimal,
    pub implant_fee: Decimal,
    pub consumables_fee: Decimal,
}

/// Provider contract, reduced to what pricing reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub provider_id: Uuid,
    /// Evaluated in order, first match wins
    #[serde(default)]
    pub scope_rules: Vec<ScopeRule>,
}

/// Which procedure codes a contract rule applies to and which fees the
/// negotiated tariff already includes for them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRule {
    pub scope_type: ScopeType,
    /// Exact internal code, for `code` rules
    #[serde(default)]
    pub code: Option<String>,
    /// Internal code prefix, for `catalog_category` rules
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub includes_doctor_fee: bool,
    #[serde(default)]
    pub includes_implantables: bool,
    #[serde(default)]
    pub includes_consumables: bool,
    #[serde(default)]
    pub includes_facility_fee: bool,
}

/// Scope rule kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeType {
    Code,
    CatalogCategory,
    All,
}

/// Doctor's agreement, reduced to the fee terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorContract {
    pub doctor_id: Uuid,
    pub fee_structure: FeeStructure,
    #[serde(default)]
    pub fee_value: Decimal,
}

/// How a doctor's fee is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStructure {
    /// Flat `fee_value`
    Fixed,
    /// `fee_value` percent of the base price
    Percentage,
    /// Unrecognised structure; contributes no fee
    #[serde(other)]
    Other,
}

/// Price quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub provider_id: Uuid,
    pub doctor_id: Option<Uuid>,
    pub internal_code: String,
    pub quantity: u32,
    pub implantable_required: bool,
}

impl PriceRequest {
    /// Request for a single unit, no doctor, no implantables
    pub fn new(provider_id: Uuid, internal_code: impl Into<String>) -> Self {
        Self {
            provider_id,
            doctor_id: None,
            internal_code: internal_code.into(),
            quantity: 1,
            implantable_required: false,
        }
    }

    pub fn with_doctor(mut self, doctor_id: Uuid) -> Self {
        self.doctor_id = Some(doctor_id);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_implantables(mut self, required: bool) -> Self {
        self.implantable_required = required;
        self
    }
}

/// Computed price for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCalculationResult {
    pub base_price: Decimal,
    pub doctor_fee: Decimal,
    pub implant_fee: Decimal,
    pub consumables_fee: Decimal,
    /// Reported only; not part of `final_price`
    pub facility_fee: Decimal,
    pub final_price: Decimal,
    pub currency: String,
    pub breakdown: PriceBreakdown,
}

/// Inclusion flags of the scope rule the price was computed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub includes_doctor_fee: bool,
    pub includes_implantables: bool,
    pub includes_consumables: bool,
    pub includes_facility_fee: bool,
}

impl From<&ScopeRule> for PriceBreakdown {
    fn from(rule: &ScopeRule) -> Self {
        Self {
            includes_doctor_fee: rule.includes_doctor_fee,
            includes_implantables: rule.includes_implantables,
            includes_consumables: rule.includes_consumables,
            includes_facility_fee: rule.includes_facility_fee,
        }
    }
}
