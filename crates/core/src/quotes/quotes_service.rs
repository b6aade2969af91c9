use log::{debug, info};
use std::sync::Arc;

use super::quotes_model::{NewQuote, Pagination, Quote, QuotePage};
use super::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use crate::errors::{Error, Result};
use async_trait::async_trait;

/// Service sitting between the HTTP handlers and a storage driver
pub struct QuoteService {
    repository: Arc<dyn QuoteRepositoryTrait>,
}

impl QuoteService {
    pub fn new(repository: Arc<dyn QuoteRepositoryTrait>) -> Self {
        QuoteService { repository }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quotes(&self, pagination: Pagination) -> Result<QuotePage> {
        debug!("Getting quotes with pagination {:?}", pagination);

        let quotes = self.repository.get_quotes(pagination).await?;
        let total = self.repository.count_quotes(None).await?;

        Ok(QuotePage { quotes, total })
    }

    /// Inserts a quote unless one with the same text already exists.
    ///
    /// The existence check and the insert are two separate storage calls, so
    /// two concurrent requests with identical text can both succeed.
    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        debug!("Adding quote {:?}", new_quote);
        new_quote.validate()?;

        let existing = self
            .repository
            .count_quotes(Some(new_quote.text.as_str()))
            .await?;
        if existing > 0 {
            return Err(Error::ConstraintViolation(
                "quote already exists".to_string(),
            ));
        }

        let quote = self.repository.add_quote(new_quote).await?;
        info!("New quote {} has been created", quote.id);
        Ok(quote)
    }

    async fn set_quotes(&self, new_quotes: Vec<NewQuote>) -> Result<Vec<Quote>> {
        debug!("Setting {} quotes", new_quotes.len());

        let quotes = self.repository.set_quotes(new_quotes).await?;
        info!("{} quotes have been created", quotes.len());
        Ok(quotes)
    }

    async fn random_quote(&self) -> Result<Quote> {
        debug!("Getting random quote");
        self.repository.random_quote().await
    }
}
