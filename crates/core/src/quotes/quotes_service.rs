use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};

use super::quote_generator::QuoteGenerator;
use super::quotes_model::Quote;
use super::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use crate::errors::{invalid_input, DatabaseError, Error, Result};
use crate::projects::{Project, ProjectRepositoryTrait};

/// Persistence-backed quote operations.
pub struct QuoteService {
    generator: QuoteGenerator,
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
    project_repository: Arc<dyn ProjectRepositoryTrait>,
}

impl QuoteService {
    pub fn new(
        generator: QuoteGenerator,
        quote_repository: Arc<dyn QuoteRepositoryTrait>,
        project_repository: Arc<dyn ProjectRepositoryTrait>,
    ) -> Self {
        Self {
            generator,
            quote_repository,
            project_repository,
        }
    }

    fn find_project(&self, project_id: &str) -> Result<Project> {
        self.project_repository.find_by_id(project_id)?.ok_or_else(|| {
            Error::MissingAssociation(format!("Quote references unknown project {}", project_id))
        })
    }

    async fn decide(&self, quote_id: &str, accept: bool) -> Result<Quote> {
        let mut quote = self.get_quote(quote_id)?;
        let before = quote.status;
        self.generator.set_acceptance(&mut quote, accept)?;

        if quote.status == before {
            return Ok(quote);
        }
        let updated = self.quote_repository.update(quote).await?;
        info!("Quote {} marked {}", updated.id, updated.status);
        Ok(updated)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn generate_quote(&self, project_id: &str) -> Result<Quote> {
        let mut project = self.find_project(project_id)?;
        let quote = self
            .generator
            .generate_quote(&mut project)
            .inspect_err(|e| error!("Error generating quote for project {}: {}", project_id, e))?;

        self.project_repository.update(project).await?;
        Ok(quote)
    }

    async fn save_quote(&self, quote: Quote) -> Result<Quote> {
        if quote.project_id.trim().is_empty() {
            return Err(Error::MissingAssociation(
                "A quote must reference a project".to_string(),
            ));
        }
        if quote.validity_date <= quote.issue_date {
            return Err(invalid_input(format!(
                "Quote validity date {} must be after issue date {}",
                quote.validity_date, quote.issue_date
            )));
        }
        self.find_project(&quote.project_id)?;

        let saved = self
            .quote_repository
            .save(quote)
            .await
            .inspect_err(|e| error!("Error saving quote: {}", e))?;
        info!("Quote saved: {}", saved.id);
        Ok(saved)
    }

    fn get_quote(&self, quote_id: &str) -> Result<Quote> {
        self.quote_repository.find_by_id(quote_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!("Quote {}", quote_id)))
        })
    }

    fn get_quotes_by_project_id(&self, project_id: &str) -> Result<Vec<Quote>> {
        self.quote_repository.find_by_project_id(project_id)
    }

    async fn accept_quote(&self, quote_id: &str) -> Result<Quote> {
        self.decide(quote_id, true).await
    }

    async fn reject_quote(&self, quote_id: &str) -> Result<Quote> {
        self.decide(quote_id, false).await
    }

    async fn update_quote(&self, quote: Quote) -> Result<Quote> {
        let stored = self.get_quote(&quote.id)?;
        if stored.project_id != quote.project_id
            || stored.issue_date != quote.issue_date
            || stored.validity_date != quote.validity_date
        {
            return Err(invalid_input(format!(
                "Quote {} cannot change its project or dates",
                quote.id
            )));
        }
        if stored.status != quote.status {
            return Err(invalid_input(format!(
                "Quote {} status changes go through accept or reject",
                quote.id
            )));
        }
        self.quote_repository.update(quote).await
    }
}
