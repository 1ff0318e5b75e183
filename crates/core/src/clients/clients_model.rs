//! Client domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{invalid_input, Result};

/// A client a renovation is quoted for.
///
/// Only professional clients carry a discount; `discount_rate` is a fraction
/// in `[0, 1)` applied to the pre-tax subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub is_professional: bool,
    pub discount_rate: Decimal,
}

impl Client {
    /// Builds a client record from validated input, resolving the discount
    /// against the configured default for professionals.
    pub fn from_new(new_client: NewClient, default_professional_discount: Decimal) -> Self {
        let discount_rate = if new_client.is_professional {
            new_client
                .discount_rate
                .unwrap_or(default_professional_discount)
        } else {
            Decimal::ZERO
        };

        Self {
            id: new_client.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_client.name.trim().to_string(),
            email: new_client.email,
            address: new_client.address,
            phone: new_client.phone,
            is_professional: new_client.is_professional,
            discount_rate,
        }
    }

    /// Discount applied to this client's projects.
    pub fn effective_discount_rate(&self) -> Decimal {
        if self.is_professional {
            self.discount_rate
        } else {
            Decimal::ZERO
        }
    }

    /// Applies an explicit update, keeping the discount invariant.
    ///
    /// A client becoming professional without an explicit rate gets
    /// `default_professional_discount`; an existing professional keeps its rate.
    pub fn apply_update(
        &mut self,
        update: ClientUpdate,
        default_professional_discount: Decimal,
    ) -> Result<()> {
        update.validate()?;
        let current_rate = if self.is_professional {
            self.discount_rate
        } else {
            default_professional_discount
        };
        self.email = update.email;
        self.address = update.address;
        self.phone = update.phone;
        self.is_professional = update.is_professional;
        self.discount_rate = if update.is_professional {
            update.discount_rate.unwrap_or(current_rate)
        } else {
            Decimal::ZERO
        };
        Ok(())
    }
}

fn check_discount(is_professional: bool, discount_rate: Option<Decimal>) -> Result<()> {
    if let Some(rate) = discount_rate {
        if rate < Decimal::ZERO || rate >= Decimal::ONE {
            return Err(invalid_input(format!(
                "Discount rate must be in [0, 1), got {}",
                rate
            )));
        }
        if !is_professional && !rate.is_zero() {
            return Err(invalid_input(
                "Only professional clients can have a discount",
            ));
        }
    }
    Ok(())
}

/// Input model for registering a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub is_professional: bool,
    /// Overrides the configured professional discount when set.
    pub discount_rate: Option<Decimal>,
}

impl NewClient {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid_input("Client name cannot be empty"));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(invalid_input(format!("Invalid email address '{}'", self.email)));
        }
        check_discount(self.is_professional, self.discount_rate)
    }
}

/// Input model for updating a registered client. The name is the lookup key
/// and cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub email: String,
    pub address: String,
    pub phone: String,
    pub is_professional: bool,
    pub discount_rate: Option<Decimal>,
}

impl ClientUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(invalid_input(format!("Invalid email address '{}'", self.email)));
        }
        check_discount(self.is_professional, self.discount_rate)
    }
}
