//! Costs module - aggregation, discount and VAT pipeline for a project.

mod cost_calculator;
mod costs_model;

#[cfg(test)]
mod cost_calculator_tests;

pub use cost_calculator::CostCalculator;
pub use costs_model::CostBreakdown;
