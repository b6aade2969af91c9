//! On-disk models for quotes.

use quotes_core::quotes::{NewQuote, Quote};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One element of the JSON array stored in the quotes file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuoteEntry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub source: String,
}

impl From<NewQuote> for QuoteEntry {
    fn from(new_quote: NewQuote) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: new_quote.text,
            source: new_quote.source,
        }
    }
}

impl From<QuoteEntry> for Quote {
    fn from(entry: QuoteEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            source: entry.source,
        }
    }
}
