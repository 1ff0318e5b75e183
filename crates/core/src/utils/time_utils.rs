use std::str::FromStr;

use chrono::{DateTime, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::DEFAULT_TIMEZONE;
use crate::errors::{CalculatorError, Error, Result};

/// Default timezone for business dates.
pub const DEFAULT_BUSINESS_TZ: Tz = chrono_tz::Europe::Paris;

/// Converts a UTC instant to a business date in the given timezone.
///
/// This is the single source of truth for turning instants into the dates
/// quotes are issued and validated against.
pub fn business_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's business date in the given timezone.
pub fn business_date_today(tz: Tz) -> NaiveDate {
    business_date_from_utc(Utc::now(), tz)
}

/// Parses an IANA timezone name such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    Tz::from_str(name.trim()).map_err(|_| {
        Error::InvalidConfigValue(format!(
            "Unknown timezone '{}' (expected an IANA name such as {})",
            name, DEFAULT_TIMEZONE
        ))
    })
}

/// Adds calendar months, clamping to the last day of shorter months
/// (2024-01-31 + 1 month = 2024-02-29).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or(Error::Calculation(CalculatorError::InvalidDate { date, months }))
}
