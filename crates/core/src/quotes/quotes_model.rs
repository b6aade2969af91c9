//! Quotes domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a stored quote.
///
/// `id` is assigned by the storage backend and is opaque to everything above it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub source: String,
}

/// Input model for creating a quote
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
}

impl NewQuote {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "text".to_string(),
            )));
        }
        Ok(())
    }
}

/// Windowed read over the collection.
///
/// Always holds `page >= 1` and `1 <= size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    size: u32,
}

impl Pagination {
    /// Builds a pagination from raw client values.
    ///
    /// Non-positive values fall back to the defaults, oversized pages are capped.
    pub fn new(page: i64, size: i64) -> Self {
        let page = if page < 1 {
            DEFAULT_PAGE
        } else {
            u32::try_from(page).unwrap_or(u32::MAX)
        };
        let size = if size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            u32::try_from(size.min(MAX_PAGE_SIZE as i64)).unwrap_or(MAX_PAGE_SIZE)
        };
        Self { page, size }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of quotes plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePage {
    pub quotes: Vec<Quote>,
    pub total: u64,
}
