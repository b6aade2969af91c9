use crate::errors::Result;
use crate::quotes::quotes_model::{NewQuote, Pagination, Quote, QuotePage};
use async_trait::async_trait;

/// Trait for quote storage drivers
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Returns the requested window in the backend's natural order.
    async fn get_quotes(&self, pagination: Pagination) -> Result<Vec<Quote>>;

    /// Counts every quote, or only those whose text equals `text` exactly.
    async fn count_quotes(&self, text: Option<&str>) -> Result<u64>;

    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote>;

    /// Replaces the whole collection. Returned quotes keep the input order.
    async fn set_quotes(&self, new_quotes: Vec<NewQuote>) -> Result<Vec<Quote>>;

    /// Fails with `DatabaseError::NotFound` when the collection is empty.
    async fn random_quote(&self) -> Result<Quote>;
}

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    async fn get_quotes(&self, pagination: Pagination) -> Result<QuotePage>;
    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote>;
    async fn set_quotes(&self, new_quotes: Vec<NewQuote>) -> Result<Vec<Quote>>;
    async fn random_quote(&self) -> Result<Quote>;
}
