//! Document models for quotes.

use mongodb::bson::oid::ObjectId;
use quotes_core::quotes::{NewQuote, Quote};
use serde::{Deserialize, Serialize};

/// Document stored in the `quotes` collection
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuoteDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub source: String,
}

impl From<NewQuote> for QuoteDocument {
    fn from(new_quote: NewQuote) -> Self {
        Self {
            id: ObjectId::new(),
            text: new_quote.text,
            source: new_quote.source,
        }
    }
}

impl From<QuoteDocument> for Quote {
    fn from(doc: QuoteDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            text: doc.text,
            source: doc.source,
        }
    }
}
