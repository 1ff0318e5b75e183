//! Itemized quote text.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::components::{Labor, Material};
use crate::costs::CostBreakdown;
use crate::errors::Result;
use crate::projects::Project;
use crate::utils::money::{format_currency, format_rate_as_percent};

/// Everything printed on a quote besides the project itself.
pub struct QuoteTerms<'a> {
    pub breakdown: &'a CostBreakdown,
    /// VAT in percent.
    pub vat_rate: Decimal,
    pub currency_symbol: &'a str,
    pub issue_date: NaiveDate,
    pub validity_date: NaiveDate,
}

/// Renders the quote body: project header, one line per material, one line
/// per labor item, then the pricing summary. Amounts carry two decimals.
pub fn render_quote_content(project: &Project, terms: &QuoteTerms<'_>) -> Result<String> {
    let cur = terms.currency_symbol;
    let b = terms.breakdown;
    let mut lines = Vec::new();

    lines.push(format!("Quote for Project: {}", project.name));
    lines.push(format!(
        "Client: {}",
        project.client_name().unwrap_or("Not assigned")
    ));
    lines.push(format!("Surface: {} m²", format_currency(project.surface)));
    lines.push(format!("Start date: {}", project.start_date));
    lines.push(format!("Status: {}", project.status));

    lines.push(String::new());
    lines.push("Materials:".to_string());
    if project.materials.is_empty() {
        lines.push("- none".to_string());
    }
    for material in &project.materials {
        lines.push(material_line(material, cur)?);
    }

    lines.push(String::new());
    lines.push("Labor:".to_string());
    if project.labor_items.is_empty() {
        lines.push("- none".to_string());
    }
    for labor in &project.labor_items {
        lines.push(labor_line(labor, cur)?);
    }

    lines.push(String::new());
    lines.push(format!("Subtotal: {}{}", format_currency(b.subtotal), cur));
    if !b.margin_amount.is_zero() {
        lines.push(format!(
            "Profit margin ({}%): {}{}",
            project.profit_margin.normalize(),
            format_currency(b.margin_amount),
            cur
        ));
    }
    if !b.discount_amount.is_zero() {
        lines.push(format!(
            "Discount ({}%): -{}{}",
            format_rate_as_percent(project.discount_rate()),
            format_currency(b.discount_amount),
            cur
        ));
    }
    lines.push(format!(
        "VAT ({}%): {}{}",
        terms.vat_rate.normalize(),
        format_currency(b.vat_amount),
        cur
    ));
    lines.push(format!("Total Cost: {}{}", format_currency(b.total_cost), cur));
    lines.push(format!(
        "Cost per m²: {}{}",
        format_currency(b.cost_per_square_meter),
        cur
    ));

    lines.push(String::new());
    lines.push(format!("Issued: {}", terms.issue_date));
    lines.push(format!("Valid until: {}", terms.validity_date));

    let mut content = lines.join("\n");
    content.push('\n');
    Ok(content)
}

fn material_line(material: &Material, cur: &str) -> Result<String> {
    let mut line = format!(
        "- {}: {} {} x {}{}",
        material.name,
        format_currency(material.quantity),
        material.unit,
        format_currency(material.unit_cost),
        cur
    );
    if !material.transport_cost.is_zero() {
        line.push_str(&format!(
            " + {}{} transport",
            format_currency(material.transport_cost),
            cur
        ));
    }
    if material.quality_coefficient != Decimal::ONE {
        line.push_str(&format!(
            " x {}",
            material.quality_coefficient.normalize()
        ));
    }
    line.push_str(&format!(
        " = {}{}",
        format_currency(material.calculate_cost()?),
        cur
    ));
    Ok(line)
}

fn labor_line(labor: &Labor, cur: &str) -> Result<String> {
    let mut line = format!(
        "- {}: {} hours x {}{}/h",
        labor.name,
        format_currency(labor.hours_worked),
        format_currency(labor.hourly_rate),
        cur
    );
    if labor.worker_productivity != Decimal::ONE {
        line.push_str(&format!(
            " x {}",
            labor.worker_productivity.normalize()
        ));
    }
    line.push_str(&format!(
        " = {}{}",
        format_currency(labor.calculate_cost()?),
        cur
    ));
    Ok(line)
}
