//! MongoDB storage implementation for quotes.

mod model;
mod repository;

pub use model::QuoteDocument;
pub use repository::MongoQuoteRepository;
