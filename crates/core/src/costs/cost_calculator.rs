use log::{debug, warn};
use rust_decimal::Decimal;

use super::costs_model::CostBreakdown;
use crate::components::{Labor, Material};
use crate::constants::DEFAULT_VAT_RATE;
use crate::errors::{CalculatorError, Error, Result};
use crate::projects::Project;
use crate::settings::PricingSettings;
use crate::utils::money::round_currency;

/// Unrounded intermediate amounts of one pricing run.
struct Pricing {
    material_cost: Decimal,
    labor_cost: Decimal,
    margin_amount: Decimal,
    discount_amount: Decimal,
    total: Decimal,
}

/// Aggregates a project's components into a VAT-inclusive total.
///
/// Component costs are VAT-exclusive; VAT is applied exactly once, on the
/// discounted total.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCalculator {
    vat_rate: Decimal,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_VAT_RATE)
    }
}

impl CostCalculator {
    /// `vat_rate` is a percentage (20 = 20%).
    pub fn new(vat_rate: Decimal) -> Self {
        CostCalculator { vat_rate }
    }

    pub fn from_settings(settings: &PricingSettings) -> Self {
        Self::new(settings.vat_rate)
    }

    pub fn vat_rate(&self) -> Decimal {
        self.vat_rate
    }

    /// Prices the project, caches the result in `project.total_cost` and
    /// returns it. The cache is left untouched when pricing fails.
    pub fn compute_total_cost(&self, project: &mut Project) -> Result<Decimal> {
        debug!("Calculating total cost for project: {}", project.name);
        let total = round_currency(self.price(project)?.total);
        project.total_cost = Some(total);
        Ok(total)
    }

    /// Total divided by surface, or zero when the surface is not positive.
    pub fn compute_cost_per_square_meter(&self, project: &mut Project) -> Result<Decimal> {
        let total = self.compute_total_cost(project)?;
        Self::per_square_meter(project, total)
    }

    /// Pricing snapshot. Does not touch the cached total.
    pub fn compute_cost_breakdown(&self, project: &Project) -> Result<CostBreakdown> {
        let pricing = self.price(project)?;

        let material_cost = round_currency(pricing.material_cost);
        let labor_cost = round_currency(pricing.labor_cost);
        let subtotal = round_currency(pricing.material_cost + pricing.labor_cost);
        let margin_amount = round_currency(pricing.margin_amount);
        let discount_amount = round_currency(pricing.discount_amount);
        let total_cost = round_currency(pricing.total);

        Ok(CostBreakdown {
            material_cost,
            labor_cost,
            subtotal,
            margin_amount,
            discount_amount,
            vat_amount: total_cost - (subtotal + margin_amount - discount_amount),
            total_cost,
            cost_per_square_meter: Self::per_square_meter(project, total_cost)?,
        })
    }

    fn per_square_meter(project: &Project, total: Decimal) -> Result<Decimal> {
        if project.surface <= Decimal::ZERO {
            warn!(
                "Invalid surface area {} for project: {}",
                project.surface, project.name
            );
            return Ok(Decimal::ZERO);
        }
        let per_unit = total.checked_div(project.surface).ok_or_else(|| {
            Error::Calculation(CalculatorError::ProjectCost {
                project: project.name.clone(),
                reason: format!("cost per m² overflows for surface {}", project.surface),
            })
        })?;
        Ok(round_currency(per_unit))
    }

    fn price(&self, project: &Project) -> Result<Pricing> {
        self.run_pipeline(project).map_err(|e| {
            Error::Calculation(CalculatorError::ProjectCost {
                project: project.name.clone(),
                reason: e.to_string(),
            })
        })
    }

    fn run_pipeline(&self, project: &Project) -> Result<Pricing> {
        let material_cost = sum_costs(
            "materials",
            project.materials.iter().map(Material::calculate_cost),
        )?;
        let labor_cost = sum_costs(
            "labor",
            project.labor_items.iter().map(Labor::calculate_cost),
        )?;

        let subtotal = checked(material_cost.checked_add(labor_cost), "subtotal")?;
        let margin_amount = checked(
            subtotal
                .checked_mul(project.profit_margin)
                .map(|m| m / Decimal::ONE_HUNDRED),
            "profit margin",
        )?;
        let before_discount = checked(subtotal.checked_add(margin_amount), "profit margin")?;

        let discount_rate = project.discount_rate();
        let discount_amount = checked(before_discount.checked_mul(discount_rate), "discount")?;
        let discounted = before_discount - discount_amount;

        let vat_factor = Decimal::ONE + self.vat_rate / Decimal::ONE_HUNDRED;
        let total = checked(discounted.checked_mul(vat_factor), "VAT")?;

        debug!(
            "Project {}: materials={} labor={} margin={} discount={} ({}) vat={}% total={}",
            project.name,
            material_cost,
            labor_cost,
            margin_amount,
            discount_amount,
            discount_rate,
            self.vat_rate,
            total
        );

        Ok(Pricing {
            material_cost,
            labor_cost,
            margin_amount,
            discount_amount,
            total,
        })
    }
}

fn sum_costs(label: &str, mut costs: impl Iterator<Item = Result<Decimal>>) -> Result<Decimal> {
    costs.try_fold(Decimal::ZERO, |acc, cost| checked(acc.checked_add(cost?), label))
}

fn checked(value: Option<Decimal>, step: &str) -> Result<Decimal> {
    value.ok_or_else(|| {
        Error::Calculation(CalculatorError::Overflow {
            component: step.to_string(),
        })
    })
}
