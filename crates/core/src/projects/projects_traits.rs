use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::components::{Labor, Material};
use crate::errors::Result;
use crate::projects::projects_model::{NewProject, Project, ProjectStatus};

/// Trait for project repository operations.
///
/// Loaded projects carry their client and components.
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    fn find_all(&self) -> Result<Vec<Project>>;
    fn find_by_id(&self, project_id: &str) -> Result<Option<Project>>;
    fn find_by_name(&self, name: &str) -> Result<Option<Project>>;
    fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>>;
    async fn save(&self, project: Project) -> Result<Project>;
    async fn update(&self, project: Project) -> Result<Project>;
    async fn delete(&self, project_id: &str) -> Result<usize>;
    async fn save_material(&self, project_id: &str, material: Material) -> Result<Material>;
    async fn save_labor(&self, project_id: &str, labor: Labor) -> Result<Labor>;
}

/// Trait for project service operations
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    async fn create_project(&self, new_project: NewProject) -> Result<Project>;
    async fn update_project(&self, project: Project) -> Result<Project>;
    fn get_all_projects(&self) -> Result<Vec<Project>>;
    fn get_project(&self, project_id: &str) -> Result<Project>;
    fn get_project_by_name(&self, name: &str) -> Result<Option<Project>>;
    fn get_projects_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>>;
    async fn delete_project(&self, project_id: &str) -> Result<()>;
    async fn add_material(&self, project_id: &str, material: Material) -> Result<Project>;
    async fn add_labor(&self, project_id: &str, labor: Labor) -> Result<Project>;
    /// Recomputes the project total and persists the refreshed cache.
    async fn calculate_total_cost(&self, project_id: &str) -> Result<Decimal>;
}
