//! Quotes module - domain models, services, and traits.

mod quotes_model;
mod quotes_service;
mod quotes_traits;

mod quotes_model_tests;

pub use quotes_model::{NewQuote, Pagination, Quote, QuotePage};
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
