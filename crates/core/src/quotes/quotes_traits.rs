use async_trait::async_trait;

use crate::errors::Result;
use crate::quotes::quotes_model::Quote;

/// Trait for quote repository operations
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    fn find_by_id(&self, quote_id: &str) -> Result<Option<Quote>>;
    fn find_by_project_id(&self, project_id: &str) -> Result<Vec<Quote>>;
    async fn save(&self, quote: Quote) -> Result<Quote>;
    async fn update(&self, quote: Quote) -> Result<Quote>;
}

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Prices a stored project, persists its refreshed total and returns an
    /// unsaved pending quote.
    async fn generate_quote(&self, project_id: &str) -> Result<Quote>;
    async fn save_quote(&self, quote: Quote) -> Result<Quote>;
    fn get_quote(&self, quote_id: &str) -> Result<Quote>;
    fn get_quotes_by_project_id(&self, project_id: &str) -> Result<Vec<Quote>>;
    async fn accept_quote(&self, quote_id: &str) -> Result<Quote>;
    async fn reject_quote(&self, quote_id: &str) -> Result<Quote>;
    async fn update_quote(&self, quote: Quote) -> Result<Quote>;
}
