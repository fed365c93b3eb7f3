use crate::models::{ScopeRule, ScopeType};

impl ScopeRule {
    /// Whether this rule applies to `internal_code`.
    ///
    /// A `code` rule without a code, or a `catalog_category` rule without a
    /// path, never matches.
    pub fn matches(&self, internal_code: &str) -> bool {
        match self.scope_type {
            ScopeType::Code => self.code.as_deref() == Some(internal_code),
            ScopeType::CatalogCategory => self
                .catalog_path
                .as_deref()
                .is_some_and(|path| internal_code.starts_with(path)),
            ScopeType::All => true,
        }
    }
}

/// First rule in list order that applies to `internal_code`
pub fn select_rule<'a>(rules: &'a [ScopeRule], internal_code: &str) -> Option<&'a ScopeRule> {
    rules.iter().find(|rule| rule.matches(internal_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule(scope_type: ScopeType) -> ScopeRule {
        ScopeRule {
            scope_type,
            code: None,
            catalog_path: None,
            includes_doctor_fee: false,
            includes_implantables: false,
            includes_consumables: false,
            includes_facility_fee: false,
        }
    }

    fn code_rule(code: &str) -> ScopeRule {
        ScopeRule {
            code: Some(code.to_string()),
            ..rule(ScopeType::Code)
        }
    }

    fn catalog_rule(path: &str) -> ScopeRule {
        ScopeRule {
            catalog_path: Some(path.to_string()),
            ..rule(ScopeType::CatalogCategory)
        }
    }

    #[test]
    fn test_code_rule_wins_over_later_catch_all() {
        let rules = vec![
            ScopeRule {
                includes_doctor_fee: true,
                ..code_rule("A")
            },
            rule(ScopeType::All),
        ];

        let selected = select_rule(&rules, "A").unwrap();
        assert_eq!(selected.scope_type, ScopeType::Code);
        assert!(selected.includes_doctor_fee);

        let fallback = select_rule(&rules, "B").unwrap();
        assert_eq!(fallback.scope_type, ScopeType::All);
    }

    #[test]
    fn test_catalog_prefix() {
        let implants = catalog_rule("IMPL");
        assert!(implants.matches("IMPL-001"));
        assert!(!implants.matches("SURG-001"));
        assert!(select_rule(&[implants], "SURG-001").is_none());
    }

    #[test]
    fn test_incomplete_rules_never_match() {
        assert!(!rule(ScopeType::Code).matches("A"));
        assert!(!rule(ScopeType::CatalogCategory).matches("A"));
        assert!(select_rule(&[], "A").is_none());
    }

    #[test]
    fn test_code_match_is_exact() {
        let exact = code_rule("SURG-001");
        assert!(!exact.matches("SURG-0011"));
        assert!(!exact.matches("surg-001"));
    }

    proptest! {
        #[test]
        fn first_matching_rule_is_selected(
            code in "[A-Z]{2,4}-[0-9]{3}",
            leading in 0usize..4,
        ) {
            let mut rules: Vec<ScopeRule> = (0..leading)
                .map(|i| code_rule(&format!("NOPE-{}", i)))
                .collect();
            rules.push(ScopeRule { includes_consumables: true, ..code_rule(&code) });
            rules.push(rule(ScopeType::All));

            let selected = select_rule(&rules, &code).unwrap();
            prop_assert_eq!(selected.code.as_deref(), Some(code.as_str()));
            prop_assert!(selected.includes_consumables);
        }
    }
}
