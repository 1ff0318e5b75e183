use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;

use super::settings_model::{
    PricingSettings, CURRENCY_SYMBOL_KEY, PROFESSIONAL_DISCOUNT_RATE_KEY,
    QUOTE_VALIDITY_MONTHS_KEY, TIMEZONE_KEY, VAT_RATE_KEY,
};
use super::SettingsRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};
use crate::utils::time_utils::parse_timezone;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Loads the pricing settings, using defaults for keys never set.
    fn get_pricing_settings(&self) -> Result<PricingSettings>;

    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;

    async fn update_vat_rate(&self, vat_rate: Decimal) -> Result<()>;

    async fn update_professional_discount_rate(&self, rate: Decimal) -> Result<()>;

    async fn update_quote_validity_months(&self, months: u32) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn parse_or_default<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.get_setting_value(key)? {
            Some(raw) => raw.trim().parse::<T>().map_err(|_| {
                Error::InvalidConfigValue(format!("Setting '{}' has invalid value '{}'", key, raw))
            }),
            None => Ok(default),
        }
    }
}

fn check_vat_rate(vat_rate: Decimal) -> Result<()> {
    if vat_rate < Decimal::ZERO || vat_rate > Decimal::ONE_HUNDRED {
        return Err(Error::InvalidConfigValue(format!(
            "VAT rate must be between 0 and 100, got {}",
            vat_rate
        )));
    }
    Ok(())
}

fn check_discount_rate(rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(Error::InvalidConfigValue(format!(
            "Discount rate must be in [0, 1), got {}",
            rate
        )));
    }
    Ok(())
}

fn check_validity_months(months: u32) -> Result<()> {
    if months == 0 {
        return Err(Error::InvalidConfigValue(
            "Quote validity must be at least one month".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_pricing_settings(&self) -> Result<PricingSettings> {
        let defaults = PricingSettings::default();

        let settings = PricingSettings {
            vat_rate: self.parse_or_default(VAT_RATE_KEY, defaults.vat_rate)?,
            professional_discount_rate: self.parse_or_default(
                PROFESSIONAL_DISCOUNT_RATE_KEY,
                defaults.professional_discount_rate,
            )?,
            quote_validity_months: self
                .parse_or_default(QUOTE_VALIDITY_MONTHS_KEY, defaults.quote_validity_months)?,
            currency_symbol: self
                .get_setting_value(CURRENCY_SYMBOL_KEY)?
                .unwrap_or(defaults.currency_symbol),
            timezone: self
                .get_setting_value(TIMEZONE_KEY)?
                .unwrap_or(defaults.timezone),
        };

        check_vat_rate(settings.vat_rate)?;
        check_discount_rate(settings.professional_discount_rate)?;
        check_validity_months(settings.quote_validity_months)?;
        parse_timezone(&settings.timezone)?;

        debug!("Loaded pricing settings: {:?}", settings);
        Ok(settings)
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_vat_rate(&self, vat_rate: Decimal) -> Result<()> {
        check_vat_rate(vat_rate)?;
        self.settings_repository
            .update_setting(VAT_RATE_KEY, &vat_rate.to_string())
            .await?;
        info!("VAT rate set to {}%", vat_rate);
        Ok(())
    }

    async fn update_professional_discount_rate(&self, rate: Decimal) -> Result<()> {
        check_discount_rate(rate)?;
        self.settings_repository
            .update_setting(PROFESSIONAL_DISCOUNT_RATE_KEY, &rate.to_string())
            .await?;
        info!("Professional discount rate set to {}", rate);
        Ok(())
    }

    async fn update_quote_validity_months(&self, months: u32) -> Result<()> {
        check_validity_months(months)?;
        self.settings_repository
            .update_setting(QUOTE_VALIDITY_MONTHS_KEY, &months.to_string())
            .await
    }
}
