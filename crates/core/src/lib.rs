//! KitchenQuote Core - cost calculation and quotation for kitchen renovations.
//!
//! This crate holds the domain models, the pricing pipeline and the quote
//! lifecycle. It is storage-agnostic and defines repository traits that a
//! persistence layer implements.

pub mod clients;
pub mod components;
pub mod constants;
pub mod costs;
pub mod errors;
pub mod projects;
pub mod quotes;
pub mod settings;
pub mod utils;

pub use clients::{Client, NewClient};
pub use components::{CostComponent, Labor, Material, MaterialType};
pub use costs::{CostBreakdown, CostCalculator};
pub use projects::{Project, ProjectStatus};
pub use quotes::{Quote, QuoteGenerator, QuoteState, QuoteStatus};
pub use settings::PricingSettings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
