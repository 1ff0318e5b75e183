//! Components module - priced items attached to a project.

mod components_model;


pub use components_model::{ComponentType, CostComponent, Labor, Material, MaterialType};
