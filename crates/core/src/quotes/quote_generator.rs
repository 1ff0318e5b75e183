use chrono::NaiveDate;
use chrono_tz::Tz;
use log::{debug, warn};
use uuid::Uuid;

use super::quote_document::{render_quote_content, QuoteTerms};
use super::quotes_model::{Quote, QuoteStatus};
use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_QUOTE_VALIDITY_MONTHS};
use crate::costs::CostCalculator;
use crate::errors::{invalid_input, Result};
use crate::projects::Project;
use crate::settings::PricingSettings;
use crate::utils::time_utils::{add_months, business_date_today, parse_timezone, DEFAULT_BUSINESS_TZ};

/// Issues quotes for projects and governs their acceptance.
///
/// Every date-dependent operation has an `_on` variant taking the business
/// date explicitly; the plain variants use today in the configured timezone.
#[derive(Debug, Clone)]
pub struct QuoteGenerator {
    calculator: CostCalculator,
    validity_months: u32,
    currency_symbol: String,
    timezone: Tz,
}

impl Default for QuoteGenerator {
    fn default() -> Self {
        Self {
            calculator: CostCalculator::default(),
            validity_months: DEFAULT_QUOTE_VALIDITY_MONTHS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            timezone: DEFAULT_BUSINESS_TZ,
        }
    }
}

impl QuoteGenerator {
    pub fn new(calculator: CostCalculator) -> Self {
        Self {
            calculator,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &PricingSettings) -> Result<Self> {
        if settings.quote_validity_months == 0 {
            return Err(invalid_input("Quote validity must be at least one month"));
        }
        Ok(Self {
            calculator: CostCalculator::from_settings(settings),
            validity_months: settings.quote_validity_months,
            currency_symbol: settings.currency_symbol.clone(),
            timezone: parse_timezone(&settings.timezone)?,
        })
    }

    pub fn calculator(&self) -> &CostCalculator {
        &self.calculator
    }

    pub fn today(&self) -> NaiveDate {
        business_date_today(self.timezone)
    }

    /// Prices the project and issues a pending quote dated today.
    pub fn generate_quote(&self, project: &mut Project) -> Result<Quote> {
        self.generate_quote_on(project, self.today())
    }

    /// Prices the project and issues a pending quote dated `issue_date`,
    /// valid for the configured number of calendar months.
    pub fn generate_quote_on(&self, project: &mut Project, issue_date: NaiveDate) -> Result<Quote> {
        let estimated_amount = self.calculator.compute_total_cost(project)?;
        let breakdown = self.calculator.compute_cost_breakdown(project)?;
        let validity_date = add_months(issue_date, self.validity_months)?;

        let content = render_quote_content(
            project,
            &QuoteTerms {
                breakdown: &breakdown,
                vat_rate: self.calculator.vat_rate(),
                currency_symbol: &self.currency_symbol,
                issue_date,
                validity_date,
            },
        )?;

        debug!(
            "Quote generated for project {}: {} valid until {}",
            project.name, estimated_amount, validity_date
        );

        Ok(Quote {
            id: Uuid::new_v4().to_string(),
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            estimated_amount,
            issue_date,
            validity_date,
            status: QuoteStatus::Pending,
            content,
        })
    }

    pub fn is_valid(&self, quote: &Quote) -> bool {
        quote.is_valid_on(self.today())
    }

    pub fn is_valid_on(&self, quote: &Quote, date: NaiveDate) -> bool {
        quote.is_valid_on(date)
    }

    /// Records acceptance (`true`) or rejection (`false`) as of today.
    pub fn set_acceptance(&self, quote: &mut Quote, accept: bool) -> Result<()> {
        self.set_acceptance_on(quote, accept, self.today())
    }

    pub fn set_acceptance_on(&self, quote: &mut Quote, accept: bool, date: NaiveDate) -> Result<()> {
        quote.decide_on(accept, date).inspect_err(|e| {
            warn!("Decision on quote {} refused: {}", quote.id, e);
        })
    }
}
