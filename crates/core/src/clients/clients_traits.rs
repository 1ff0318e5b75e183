use async_trait::async_trait;

use crate::clients::clients_model::{Client, ClientUpdate, NewClient};
use crate::errors::Result;

/// Trait for client repository operations
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    fn find_all(&self) -> Result<Vec<Client>>;
    fn find_by_name(&self, name: &str) -> Result<Option<Client>>;
    fn find_by_id(&self, client_id: &str) -> Result<Option<Client>>;
    /// Number of projects still referencing the client.
    fn count_projects(&self, client_id: &str) -> Result<usize>;
    async fn save(&self, client: Client) -> Result<Client>;
    async fn update(&self, client: Client) -> Result<Client>;
    async fn delete(&self, client_id: &str) -> Result<usize>;
}

/// Trait for client service operations
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;
    fn get_all_clients(&self) -> Result<Vec<Client>>;
    fn get_client_by_name(&self, name: &str) -> Result<Option<Client>>;
    async fn update_client(&self, name: &str, update: ClientUpdate) -> Result<Client>;
    async fn delete_client(&self, name: &str) -> Result<Option<Client>>;
    fn get_total_client_count(&self) -> Result<usize>;
    fn get_professional_clients(&self) -> Result<Vec<Client>>;
}
