//! Driver selection from a connection string.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;
use quotes_core::errors::Error;
use quotes_core::quotes::{NewQuote, Pagination, Quote, QuoteRepositoryTrait};
use quotes_core::Result;

use crate::file::FileQuoteRepository;
use crate::mongo::MongoQuoteRepository;

const MONGO_SCHEMES: [&str; 2] = ["mongodb://", "mongodb+srv://"];
const FILE_SCHEME: &str = "file://";

/// Parsed storage connection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dsn {
    /// Full MongoDB URI, scheme included
    Mongo(String),
    /// Path of the JSON file, scheme stripped
    File(PathBuf),
}

impl Dsn {
    pub fn parse(dsn: &str) -> Result<Self> {
        let dsn = dsn.trim();
        if MONGO_SCHEMES.iter().any(|scheme| dsn.starts_with(scheme)) {
            return Ok(Dsn::Mongo(dsn.to_string()));
        }
        if let Some(path) = dsn.strip_prefix(FILE_SCHEME) {
            if path.is_empty() {
                return Err(Error::InvalidConfigValue(format!(
                    "missing file path in dsn {dsn}"
                )));
            }
            return Ok(Dsn::File(PathBuf::from(path)));
        }
        Err(Error::InvalidConfigValue(format!(
            "no storage driver found for dsn {dsn}"
        )))
    }
}

/// One of the supported storage drivers
pub enum QuoteStore {
    Mongo(MongoQuoteRepository),
    File(FileQuoteRepository),
}

impl QuoteStore {
    /// Opens the driver matching the scheme of `dsn`.
    pub async fn connect(dsn: &str) -> Result<Self> {
        match Dsn::parse(dsn)? {
            Dsn::Mongo(uri) => {
                info!("Using MongoDB storage");
                Ok(QuoteStore::Mongo(MongoQuoteRepository::connect(&uri).await?))
            }
            Dsn::File(path) => {
                info!("Using file storage at {}", path.display());
                Ok(QuoteStore::File(FileQuoteRepository::open(path).await?))
            }
        }
    }

    fn driver(&self) -> &dyn QuoteRepositoryTrait {
        match self {
            QuoteStore::Mongo(repo) => repo,
            QuoteStore::File(repo) => repo,
        }
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteStore {
    async fn get_quotes(&self, pagination: Pagination) -> Result<Vec<Quote>> {
        self.driver().get_quotes(pagination).await
    }

    async fn count_quotes(&self, text: Option<&str>) -> Result<u64> {
        self.driver().count_quotes(text).await
    }

    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        self.driver().add_quote(new_quote).await
    }

    async fn set_quotes(&self, new_quotes: Vec<NewQuote>) -> Result<Vec<Quote>> {
        self.driver().set_quotes(new_quotes).await
    }

    async fn random_quote(&self) -> Result<Quote> {
        self.driver().random_quote().await
    }
}
