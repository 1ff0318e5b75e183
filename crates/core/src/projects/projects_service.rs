use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};
use rust_decimal::Decimal;

use super::projects_model::{NewProject, Project, ProjectStatus};
use super::projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
use crate::clients::ClientRepositoryTrait;
use crate::components::{Labor, Material};
use crate::costs::CostCalculator;
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing projects and their components.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepositoryTrait>,
    client_repository: Arc<dyn ClientRepositoryTrait>,
    calculator: CostCalculator,
}

impl ProjectService {
    pub fn new(
        repository: Arc<dyn ProjectRepositoryTrait>,
        client_repository: Arc<dyn ClientRepositoryTrait>,
        calculator: CostCalculator,
    ) -> Self {
        Self {
            repository,
            client_repository,
            calculator,
        }
    }
}

fn project_not_found(project_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("Project {}", project_id)))
}

#[async_trait]
impl ProjectServiceTrait for ProjectService {
    async fn create_project(&self, new_project: NewProject) -> Result<Project> {
        new_project.validate()?;

        let client = self
            .client_repository
            .find_by_name(new_project.client_name.trim())?
            .ok_or_else(|| {
                Error::MissingAssociation(format!(
                    "Client '{}' must be registered before creating a project",
                    new_project.client_name
                ))
            })?;

        let project = Project::new(
            new_project.name.trim(),
            new_project.surface,
            new_project.start_date,
        )
        .with_client(client)
        .with_status(new_project.status)
        .with_profit_margin(new_project.profit_margin);

        let saved = self.repository.save(project).await?;
        info!("Project created: {}", saved.name);
        Ok(saved)
    }

    async fn update_project(&self, project: Project) -> Result<Project> {
        if let Some(client) = &project.client {
            if self.client_repository.find_by_id(&client.id)?.is_none() {
                return Err(Error::MissingAssociation(format!(
                    "Client '{}' is not registered",
                    client.name
                )));
            }
        }
        let updated = self.repository.update(project).await?;
        info!("Project updated: {}", updated.name);
        Ok(updated)
    }

    fn get_all_projects(&self) -> Result<Vec<Project>> {
        self.repository.find_all()
    }

    fn get_project(&self, project_id: &str) -> Result<Project> {
        self.repository
            .find_by_id(project_id)?
            .ok_or_else(|| project_not_found(project_id))
    }

    fn get_project_by_name(&self, name: &str) -> Result<Option<Project>> {
        self.repository.find_by_name(name)
    }

    fn get_projects_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>> {
        let projects = self.repository.find_by_status(status)?;
        debug!("Found {} project(s) with status {}", projects.len(), status.as_str());
        Ok(projects)
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        let deleted = self.repository.delete(project_id).await?;
        if deleted == 0 {
            return Err(project_not_found(project_id));
        }
        info!("Project deleted with id: {}", project_id);
        Ok(())
    }

    async fn add_material(&self, project_id: &str, material: Material) -> Result<Project> {
        material.validate()?;
        let mut project = self.get_project(project_id)?;

        let saved = self.repository.save_material(project_id, material).await?;
        debug!("Material '{}' added to project {}", saved.name, project.name);
        project.add_material(saved);
        Ok(project)
    }

    async fn add_labor(&self, project_id: &str, labor: Labor) -> Result<Project> {
        labor.validate()?;
        let mut project = self.get_project(project_id)?;

        let saved = self.repository.save_labor(project_id, labor).await?;
        debug!("Labor '{}' added to project {}", saved.name, project.name);
        project.add_labor(saved);
        Ok(project)
    }

    async fn calculate_total_cost(&self, project_id: &str) -> Result<Decimal> {
        let mut project = self.get_project(project_id)?;

        let total = self
            .calculator
            .compute_total_cost(&mut project)
            .inspect_err(|e| error!("Error calculating total cost for project {}: {}", project_id, e))?;

        self.repository.update(project).await?;
        info!("Total cost calculated and saved for project: {}", project_id);
        Ok(total)
    }
}
