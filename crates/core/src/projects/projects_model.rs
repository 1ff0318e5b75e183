//! Project domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clients::Client;
use crate::components::{CostComponent, Labor, Material};
use crate::errors::{invalid_input, Result};

/// Progress of a renovation project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Cancelled,
    #[default]
    Pending,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Cancelled => "CANCELLED",
            ProjectStatus::Pending => "PENDING",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A kitchen renovation being quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Surface in m².
    pub surface: Decimal,
    pub start_date: NaiveDate,
    pub status: ProjectStatus,
    pub client: Option<Client>,
    pub materials: Vec<Material>,
    pub labor_items: Vec<Labor>,
    /// Margin in percent added to the subtotal before discount.
    pub profit_margin: Decimal,
    /// Last total computed by the cost calculator. Derived, never an input.
    pub total_cost: Option<Decimal>,
}

impl Project {
    pub fn new(name: impl Into<String>, surface: Decimal, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            surface,
            start_date,
            status: ProjectStatus::default(),
            client: None,
            materials: Vec::new(),
            labor_items: Vec::new(),
            profit_margin: Decimal::ZERO,
            total_cost: None,
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_profit_margin(mut self, profit_margin: Decimal) -> Self {
        self.profit_margin = profit_margin;
        self
    }

    /// Appending a component invalidates the cached total.
    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
        self.total_cost = None;
    }

    pub fn add_labor(&mut self, labor: Labor) {
        self.labor_items.push(labor);
        self.total_cost = None;
    }

    /// All components, materials first.
    pub fn components(&self) -> Vec<CostComponent> {
        self.materials
            .iter()
            .cloned()
            .map(CostComponent::from)
            .chain(self.labor_items.iter().cloned().map(CostComponent::from))
            .collect()
    }

    pub fn has_components(&self) -> bool {
        !self.materials.is_empty() || !self.labor_items.is_empty()
    }

    pub fn client_name(&self) -> Option<&str> {
        self.client.as_ref().map(|c| c.name.as_str())
    }

    /// Discount applicable to the project, zero without a client.
    pub fn discount_rate(&self) -> Decimal {
        self.client
            .as_ref()
            .map(Client::effective_discount_rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Input model for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub surface: Decimal,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub status: ProjectStatus,
    /// Name of a registered client.
    pub client_name: String,
    #[serde(default)]
    pub profit_margin: Decimal,
}

impl NewProject {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid_input("Project name cannot be empty"));
        }
        if self.surface <= Decimal::ZERO {
            return Err(invalid_input(format!(
                "Surface must be greater than zero, got {}",
                self.surface
            )));
        }
        if self.profit_margin < Decimal::ZERO {
            return Err(invalid_input(format!(
                "Profit margin cannot be negative, got {}",
                self.profit_margin
            )));
        }
        if self.client_name.trim().is_empty() {
            return Err(invalid_input("A client is required to create a project"));
        }
        Ok(())
    }
}
