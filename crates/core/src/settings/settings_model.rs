//! Pricing configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_PROFESSIONAL_DISCOUNT_RATE, DEFAULT_QUOTE_VALIDITY_MONTHS,
    DEFAULT_TIMEZONE, DEFAULT_VAT_RATE,
};

pub const VAT_RATE_KEY: &str = "vat_rate";
pub const PROFESSIONAL_DISCOUNT_RATE_KEY: &str = "professional_discount_rate";
pub const QUOTE_VALIDITY_MONTHS_KEY: &str = "quote_validity_months";
pub const CURRENCY_SYMBOL_KEY: &str = "currency_symbol";
pub const TIMEZONE_KEY: &str = "timezone";

/// Settings the cost calculator and quote generator are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingSettings {
    /// VAT applied once to the discounted total, in percent (20 = 20%).
    pub vat_rate: Decimal,
    /// Fraction in [0, 1) granted to professional clients by default.
    pub professional_discount_rate: Decimal,
    pub quote_validity_months: u32,
    pub currency_symbol: String,
    pub timezone: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            professional_discount_rate: DEFAULT_PROFESSIONAL_DISCOUNT_RATE,
            quote_validity_months: DEFAULT_QUOTE_VALIDITY_MONTHS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}
