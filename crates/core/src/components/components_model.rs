//! Cost component domain models.
//!
//! Component costs are VAT-exclusive. VAT is applied once on the project
//! total by the cost calculator; the `vat_rate` carried by each component is
//! informational and only surfaces through [`CostComponent::vat_amount`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{invalid_input, CalculatorError, Error, Result};

/// Discriminator shared by every priced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Material,
    Labor,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Material => "MATERIAL",
            ComponentType::Labor => "LABOR",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Material category used to group lines on a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialType {
    Appliance,
    Cabinet,
    Countertop,
    Plumbing,
    Electrical,
    Flooring,
    Paint,
    Hardware,
    #[default]
    Other,
}

impl MaterialType {
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialType::Appliance => "Appliance",
            MaterialType::Cabinet => "Cabinet",
            MaterialType::Countertop => "Countertop",
            MaterialType::Plumbing => "Plumbing",
            MaterialType::Electrical => "Electrical",
            MaterialType::Flooring => "Flooring",
            MaterialType::Paint => "Paint",
            MaterialType::Hardware => "Hardware",
            MaterialType::Other => "Other",
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn overflow(component: &str) -> Error {
    Error::Calculation(CalculatorError::Overflow {
        component: component.to_string(),
    })
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_input("Component name cannot be empty"));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(invalid_input(format!("{} cannot be negative, got {}", field, value)));
    }
    Ok(())
}

fn check_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(invalid_input(format!("{} must be greater than zero, got {}", field, value)));
    }
    Ok(())
}

fn check_vat_rate(value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(invalid_input(format!("VAT rate must be between 0 and 100, got {}", value)));
    }
    Ok(())
}

/// A material line: goods bought and delivered to the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub material_type: MaterialType,
    /// Unit the quantity is expressed in (e.g. "m²", "unit").
    pub unit: String,
    pub unit_cost: Decimal,
    pub quantity: Decimal,
    pub transport_cost: Decimal,
    /// Dimensionless grade multiplier, typically 0.8 to 1.5.
    pub quality_coefficient: Decimal,
    /// Informational VAT rate in percent.
    pub vat_rate: Decimal,
}

impl Material {
    /// Creates a material with a fresh id, no transport cost and a neutral
    /// quality coefficient.
    pub fn new(name: impl Into<String>, unit_cost: Decimal, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            material_type: MaterialType::default(),
            unit: "unit".to_string(),
            unit_cost,
            quantity,
            transport_cost: Decimal::ZERO,
            quality_coefficient: Decimal::ONE,
            vat_rate: Decimal::ZERO,
        }
    }

    pub fn with_type(mut self, material_type: MaterialType) -> Self {
        self.material_type = material_type;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_transport_cost(mut self, transport_cost: Decimal) -> Self {
        self.transport_cost = transport_cost;
        self
    }

    pub fn with_quality_coefficient(mut self, quality_coefficient: Decimal) -> Self {
        self.quality_coefficient = quality_coefficient;
        self
    }

    pub fn with_vat_rate(mut self, vat_rate: Decimal) -> Self {
        self.vat_rate = vat_rate;
        self
    }

    /// `(unit_cost × quantity + transport_cost) × quality_coefficient`, VAT excluded.
    pub fn calculate_cost(&self) -> Result<Decimal> {
        self.unit_cost
            .checked_mul(self.quantity)
            .and_then(|goods| goods.checked_add(self.transport_cost))
            .and_then(|delivered| delivered.checked_mul(self.quality_coefficient))
            .ok_or_else(|| overflow(&self.name))
    }

    /// Validates user-entered values before the material is attached to a project.
    pub fn validate(&self) -> Result<()> {
        check_name(&self.name)?;
        check_non_negative("Unit cost", self.unit_cost)?;
        check_non_negative("Quantity", self.quantity)?;
        check_non_negative("Transport cost", self.transport_cost)?;
        check_positive("Quality coefficient", self.quality_coefficient)?;
        check_vat_rate(self.vat_rate)
    }
}

/// A labor line: hours worked by a crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labor {
    pub id: String,
    pub name: String,
    pub hourly_rate: Decimal,
    pub hours_worked: Decimal,
    /// Multiplicative crew efficiency factor, 1.0 is nominal.
    pub worker_productivity: Decimal,
    /// Informational VAT rate in percent.
    pub vat_rate: Decimal,
}

impl Labor {
    pub fn new(name: impl Into<String>, hourly_rate: Decimal, hours_worked: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            hourly_rate,
            hours_worked,
            worker_productivity: Decimal::ONE,
            vat_rate: Decimal::ZERO,
        }
    }

    pub fn with_productivity(mut self, worker_productivity: Decimal) -> Self {
        self.worker_productivity = worker_productivity;
        self
    }

    pub fn with_vat_rate(mut self, vat_rate: Decimal) -> Self {
        self.vat_rate = vat_rate;
        self
    }

    /// `hourly_rate × hours_worked × worker_productivity`, VAT excluded.
    pub fn calculate_cost(&self) -> Result<Decimal> {
        self.hourly_rate
            .checked_mul(self.hours_worked)
            .and_then(|base| base.checked_mul(self.worker_productivity))
            .ok_or_else(|| overflow(&self.name))
    }

    pub fn validate(&self) -> Result<()> {
        check_name(&self.name)?;
        check_non_negative("Hourly rate", self.hourly_rate)?;
        check_non_negative("Hours worked", self.hours_worked)?;
        check_positive("Worker productivity", self.worker_productivity)?;
        check_vat_rate(self.vat_rate)
    }
}

/// Any priced item of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "componentType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostComponent {
    Material(Material),
    Labor(Labor),
}

impl CostComponent {
    pub fn id(&self) -> &str {
        match self {
            CostComponent::Material(m) => &m.id,
            CostComponent::Labor(l) => &l.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CostComponent::Material(m) => &m.name,
            CostComponent::Labor(l) => &l.name,
        }
    }

    pub fn component_type(&self) -> ComponentType {
        match self {
            CostComponent::Material(_) => ComponentType::Material,
            CostComponent::Labor(_) => ComponentType::Labor,
        }
    }

    pub fn vat_rate(&self) -> Decimal {
        match self {
            CostComponent::Material(m) => m.vat_rate,
            CostComponent::Labor(l) => l.vat_rate,
        }
    }

    pub fn calculate_cost(&self) -> Result<Decimal> {
        match self {
            CostComponent::Material(m) => m.calculate_cost(),
            CostComponent::Labor(l) => l.calculate_cost(),
        }
    }

    /// VAT this component would carry at its own rate. Not part of any total.
    pub fn vat_amount(&self) -> Result<Decimal> {
        let cost = self.calculate_cost()?;
        cost.checked_mul(self.vat_rate())
            .map(|v| v / Decimal::ONE_HUNDRED)
            .ok_or_else(|| overflow(self.name()))
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            CostComponent::Material(m) => m.validate(),
            CostComponent::Labor(l) => l.validate(),
        }
    }
}

impl From<Material> for CostComponent {
    fn from(material: Material) -> Self {
        CostComponent::Material(material)
    }
}

impl From<Labor> for CostComponent {
    fn from(labor: Labor) -> Self {
        CostComponent::Labor(labor)
    }
}
