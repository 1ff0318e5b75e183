//! Currency rounding and formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_DECIMAL_PRECISION;

/// Rounds an amount to cents, half away from zero (0.125 -> 0.13).
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Renders an amount rounded to cents with exactly two decimals.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = round_currency(amount);
    rounded.rescale(CURRENCY_DECIMAL_PRECISION);
    rounded.to_string()
}

/// Renders a fraction (0.05) as a percentage without trailing zeros ("5").
pub fn format_rate_as_percent(rate: Decimal) -> String {
    (rate * Decimal::ONE_HUNDRED).normalize().to_string()
}
