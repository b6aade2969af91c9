//! JSON file storage implementation for quotes.

mod model;
mod repository;

pub use model::QuoteEntry;
pub use repository::FileQuoteRepository;
