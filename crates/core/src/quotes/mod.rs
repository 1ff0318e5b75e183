//! Quotes module - quote documents, their generation and lifecycle.
//!
//! - [`quotes_model`] - the quote record, its stored status and derived state
//! - [`quote_generator`] - prices a project and issues a quote for it
//! - [`quote_document`] - renders the itemized quote text
//! - [`quotes_service`] - persistence-backed operations over stored quotes
//!
//! ```text
//! Project -> CostCalculator -> QuoteGenerator -> Quote -> QuoteRepository
//! ```

mod quote_document;
mod quote_generator;
mod quotes_model;
mod quotes_service;
mod quotes_traits;


pub use quote_document::{render_quote_content, QuoteTerms};
pub use quote_generator::QuoteGenerator;
pub use quotes_model::{Quote, QuoteState, QuoteStatus};
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
