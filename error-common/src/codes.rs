// Error codes implementation
// This module contains standardized error codes for the ClaimsDesk engine

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
}

pub mod pricing {
    pub const TARIFF_NOT_FOUND: &str = "PRICING_1001";
    pub const NO_MATCHING_SCOPE_RULE: &str = "PRICING_1002";
    pub const PRICE_OVERFLOW: &str = "PRICING_1003";
}

pub mod database {
    pub const QUERY_FAILED: &str = "DB_4002";
    pub const RECORD_NOT_FOUND: &str = "DB_4004";
}

pub mod configuration {
    pub const INVALID_CONFIG: &str = "CONFIG_5001";
}

pub mod system {
    pub const INTERNAL: &str = "SYS_9001";
    pub const EXTERNAL_FAILURE: &str = "SYS_9002";
}
