use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::clients_model::{Client, ClientUpdate, NewClient};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::settings::PricingSettings;

/// Service for registering and maintaining clients.
pub struct ClientService {
    repository: Arc<dyn ClientRepositoryTrait>,
    default_professional_discount: Decimal,
}

impl ClientService {
    pub fn new(
        repository: Arc<dyn ClientRepositoryTrait>,
        default_professional_discount: Decimal,
    ) -> Self {
        ClientService {
            repository,
            default_professional_discount,
        }
    }

    pub fn from_settings(
        repository: Arc<dyn ClientRepositoryTrait>,
        settings: &PricingSettings,
    ) -> Self {
        Self::new(repository, settings.professional_discount_rate)
    }
}

#[async_trait]
impl ClientServiceTrait for ClientService {
    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        new_client.validate()?;

        if self.repository.find_by_name(new_client.name.trim())?.is_some() {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "A client named '{}' already exists",
                new_client.name.trim()
            ))));
        }

        let client = Client::from_new(new_client, self.default_professional_discount);
        let saved = self.repository.save(client).await?;
        info!("Client created: {}", saved.name);
        Ok(saved)
    }

    fn get_all_clients(&self) -> Result<Vec<Client>> {
        self.repository.find_all()
    }

    fn get_client_by_name(&self, name: &str) -> Result<Option<Client>> {
        self.repository.find_by_name(name)
    }

    async fn update_client(&self, name: &str, update: ClientUpdate) -> Result<Client> {
        let mut client = self.repository.find_by_name(name)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!("Client '{}'", name)))
        })?;

        client.apply_update(update, self.default_professional_discount)?;
        let updated = self.repository.update(client).await?;
        info!("Client updated: {}", updated.name);
        Ok(updated)
    }

    async fn delete_client(&self, name: &str) -> Result<Option<Client>> {
        let Some(client) = self.repository.find_by_name(name)? else {
            warn!("Client not found for deletion: {}", name);
            return Ok(None);
        };

        let referencing = self.repository.count_projects(&client.id)?;
        if referencing > 0 {
            return Err(Error::Database(DatabaseError::ForeignKeyViolation(format!(
                "Client '{}' is still referenced by {} project(s)",
                name, referencing
            ))));
        }

        self.repository.delete(&client.id).await?;
        info!("Client deleted: {}", name);
        Ok(Some(client))
    }

    fn get_total_client_count(&self) -> Result<usize> {
        Ok(self.get_all_clients()?.len())
    }

    fn get_professional_clients(&self) -> Result<Vec<Client>> {
        let professionals: Vec<Client> = self
            .get_all_clients()?
            .into_iter()
            .filter(|c| c.is_professional)
            .collect();
        debug!("Found {} professional client(s)", professionals.len());
        Ok(professionals)
    }
}
