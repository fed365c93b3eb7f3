use rust_decimal::Decimal;

use crate::error::{TariffError, TariffResult};
use crate::models::{
    DoctorContract, FeeStructure, PriceBreakdown, PriceCalculationResult, PriceRequest, ScopeRule,
    Tariff,
};

impl DoctorContract {
    /// Doctor's fee for a procedure priced at `base_price`, `None` when
    /// the percentage overflows
    pub fn fee_for(&self, base_price: Decimal) -> Option<Decimal> {
        match self.fee_structure {
            FeeStructure::Fixed => Some(self.fee_value),
            FeeStructure::Percentage => base_price
                .checked_mul(self.fee_value)?
                .checked_div(Decimal::ONE_HUNDRED),
            FeeStructure::Other => Some(Decimal::ZERO),
        }
    }
}

/// Layer the fees not covered by `rule` on top of the tariff's base price.
///
/// `doctor_contract` is only consulted when the request names a doctor.
/// The facility fee is reported from the tariff but never added to the
/// final price.
///
/// # Errors
///
/// `PriceOverflow` when the quantity, a percentage fee or the fee sum
/// exceeds the decimal range.
pub fn price_with_rule(
    tariff: &Tariff,
    rule: &ScopeRule,
    doctor_contract: Option<&DoctorContract>,
    request: &PriceRequest,
    default_currency: &str,
) -> TariffResult<PriceCalculationResult> {
    let overflow = || TariffError::PriceOverflow {
        internal_code: request.internal_code.clone(),
    };
    let components = &tariff.price_components;
    let base_price = tariff
        .base_price
        .checked_mul(Decimal::from(request.quantity))
        .ok_or_else(overflow)?;

    let doctor_fee = match (request.doctor_id, doctor_contract) {
        (Some(_), Some(contract)) if !rule.includes_doctor_fee => {
            contract.fee_for(base_price).ok_or_else(overflow)?
        }
        _ => Decimal::ZERO,
    };

    let implant_fee = if request.implantable_required && !rule.includes_implantables {
        components.implant_fee
    } else {
        Decimal::ZERO
    };

    let consumables_fee = if rule.includes_consumables {
        Decimal::ZERO
    } else {
        components.consumables_fee
    };

    let currency = tariff
        .currency
        .as_deref()
        .filter(|currency| !currency.is_empty())
        .unwrap_or(default_currency)
        .to_string();

    let final_price = [doctor_fee, implant_fee, consumables_fee]
        .into_iter()
        .try_fold(base_price, Decimal::checked_add)
        .ok_or_else(overflow)?;

    Ok(PriceCalculationResult {
        base_price,
        doctor_fee,
        implant_fee,
        consumables_fee,
        facility_fee: components.facility_fee,
        final_price,
        currency,
        breakdown: PriceBreakdown::from(rule),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceComponents, ScopeType};
    use uuid::Uuid;

    fn tariff(base: i64) -> Tariff {
        Tariff {
            provider_id: Uuid::new_v4(),
            internal_code: "SURG-001".to_string(),
            base_price: Decimal::from(base),
            currency: None,
            price_components: PriceComponents::default(),
        }
    }

    fn catch_all() -> ScopeRule {
        ScopeRule {
            scope_type: ScopeType::All,
            code: None,
            catalog_path: None,
            includes_doctor_fee: false,
            includes_implantables: false,
            includes_consumables: false,
            includes_facility_fee: false,
        }
    }

    fn doctor(fee_structure: FeeStructure, fee_value: i64) -> DoctorContract {
        DoctorContract {
            doctor_id: Uuid::new_v4(),
            fee_structure,
            fee_value: Decimal::from(fee_value),
        }
    }

    #[test]
    fn test_percentage_doctor_fee() {
        let t = tariff(1000);
        let contract = doctor(FeeStructure::Percentage, 10);
        let request = PriceRequest::new(t.provider_id, "SURG-001").with_doctor(contract.doctor_id);

        let result = price_with_rule(&t, &catch_all(), Some(&contract), &request, "ILS").unwrap();
        assert_eq!(result.doctor_fee, Decimal::from(100));
        assert_eq!(result.final_price, Decimal::from(1100));
    }

    #[test]
    fn test_fixed_doctor_fee_ignores_quantity() {
        let t = tariff(200);
        let contract = doctor(FeeStructure::Fixed, 350);
        let request = PriceRequest::new(t.provider_id, "SURG-001")
            .with_doctor(contract.doctor_id)
            .with_quantity(3);

        let result = price_with_rule(&t, &catch_all(), Some(&contract), &request, "ILS").unwrap();
        assert_eq!(result.base_price, Decimal::from(600));
        assert_eq!(result.doctor_fee, Decimal::from(350));
        assert_eq!(result.final_price, Decimal::from(950));
    }

    #[test]
    fn test_included_doctor_fee_is_zero() {
        let t = tariff(1000);
        let contract = doctor(FeeStructure::Fixed, 500);
        let rule = ScopeRule {
            includes_doctor_fee: true,
            ..catch_all()
        };
        let request = PriceRequest::new(t.provider_id, "SURG-001").with_doctor(contract.doctor_id);

        let result = price_with_rule(&t, &rule, Some(&contract), &request, "ILS").unwrap();
        assert_eq!(result.doctor_fee, Decimal::ZERO);
        assert_eq!(result.final_price, Decimal::from(1000));
    }

    #[test]
    fn test_doctor_contract_unused_without_doctor() {
        let t = tariff(1000);
        let contract = doctor(FeeStructure::Fixed, 500);
        let request = PriceRequest::new(t.provider_id, "SURG-001");

        let result = price_with_rule(&t, &catch_all(), Some(&contract), &request, "ILS").unwrap();
        assert_eq!(result.doctor_fee, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_fee_structure_adds_nothing() {
        let contract = doctor(FeeStructure::Other, 40);
        assert_eq!(contract.fee_for(Decimal::from(1000)), Some(Decimal::ZERO));
    }

    #[test]
    fn test_component_layering() {
        let mut t = tariff(1000);
        t.currency = Some("USD".to_string());
        t.price_components = PriceComponents {
            facility_fee: Decimal::from(70),
            doctor_fee: Decimal::ZERO,
            implant_fee: Decimal::from(400),
            consumables_fee: Decimal::from(25),
        };

        let without_implant = PriceRequest::new(t.provider_id, "SURG-001");
        let result = price_with_rule(&t, &catch_all(), None, &without_implant, "ILS").unwrap();
        assert_eq!(result.implant_fee, Decimal::ZERO);
        assert_eq!(result.consumables_fee, Decimal::from(25));
        assert_eq!(result.facility_fee, Decimal::from(70));
        assert_eq!(result.final_price, Decimal::from(1025));
        assert_eq!(result.currency, "USD");

        let with_implant = without_implant.with_implantables(true);
        let result = price_with_rule(&t, &catch_all(), None, &with_implant, "ILS").unwrap();
        assert_eq!(result.implant_fee, Decimal::from(400));
        assert_eq!(result.final_price, Decimal::from(1425));

        let covered = ScopeRule {
            includes_implantables: true,
            includes_consumables: true,
            includes_facility_fee: true,
            ..catch_all()
        };
        let result = price_with_rule(&t, &covered, None, &with_implant, "ILS").unwrap();
        assert_eq!(result.final_price, Decimal::from(1000));
        assert_eq!(result.facility_fee, Decimal::from(70));
        assert!(result.breakdown.includes_facility_fee);
        assert!(!result.breakdown.includes_doctor_fee);
    }

    #[test]
    fn test_default_currency() {
        let mut t = tariff(10);
        let request = PriceRequest::new(t.provider_id, "SURG-001");
        assert_eq!(price_with_rule(&t, &catch_all(), None, &request, "ILS").unwrap().currency, "ILS");

        t.currency = Some(String::new());
        assert_eq!(price_with_rule(&t, &catch_all(), None, &request, "ILS").unwrap().currency, "ILS");
    }

    #[test]
    fn test_quantity_overflow_is_an_error() {
        let mut t = tariff(0);
        t.base_price = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        let request = PriceRequest::new(t.provider_id, "SURG-001").with_quantity(u32::MAX);

        let err = price_with_rule(&t, &catch_all(), None, &request, "ILS").unwrap_err();
        assert!(matches!(err, TariffError::PriceOverflow { ref internal_code } if internal_code == "SURG-001"));
        assert_eq!(err.code(), "PRICING_1003");
    }

    #[test]
    fn test_percentage_fee_overflow_is_an_error() {
        let mut t = tariff(0);
        t.base_price = Decimal::MAX;
        let contract = doctor(FeeStructure::Percentage, 50);
        let request = PriceRequest::new(t.provider_id, "SURG-001").with_doctor(contract.doctor_id);

        assert_eq!(contract.fee_for(Decimal::MAX), None);
        let err = price_with_rule(&t, &catch_all(), Some(&contract), &request, "ILS").unwrap_err();
        assert!(matches!(err, TariffError::PriceOverflow { .. }));
    }

    #[test]
    fn test_fee_sum_overflow_is_an_error() {
        let mut t = tariff(0);
        t.base_price = Decimal::MAX;
        t.price_components.consumables_fee = Decimal::ONE;
        let request = PriceRequest::new(t.provider_id, "SURG-001");

        let err = price_with_rule(&t, &catch_all(), None, &request, "ILS").unwrap_err();
        assert!(matches!(err, TariffError::PriceOverflow { .. }));
    }
}
