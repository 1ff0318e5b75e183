use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default VAT rate applied once to the discounted project total, in percent.
pub const DEFAULT_VAT_RATE: Decimal = dec!(20);

/// Discount granted to professional clients when none is set explicitly.
pub const DEFAULT_PROFESSIONAL_DISCOUNT_RATE: Decimal = dec!(0.05);

/// Number of calendar months a quote stays acceptable after issue.
pub const DEFAULT_QUOTE_VALIDITY_MONTHS: u32 = 1;

/// Decimal precision for currency amounts
pub const CURRENCY_DECIMAL_PRECISION: u32 = 2;

/// Currency symbol appended to rendered amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// IANA time zone used to derive the business date
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";
