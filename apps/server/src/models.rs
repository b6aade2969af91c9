use quotes_core::quotes as core_quotes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub source: String,
}

impl From<core_quotes::Quote> for Quote {
    fn from(q: core_quotes::Quote) -> Self {
        Self {
            id: q.id,
            text: q.text,
            source: q.source,
        }
    }
}

/// Request body for creating quotes. Any `id` sent by the client is ignored.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct NewQuote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
}

impl From<NewQuote> for core_quotes::NewQuote {
    fn from(q: NewQuote) -> Self {
        core_quotes::NewQuote::new(q.text, q.source)
    }
}
