use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use quotes_core::errors::{DatabaseError, Error};
use quotes_core::quotes::{NewQuote, Pagination, Quote, QuoteRepositoryTrait};
use quotes_core::Result;
use rand::Rng;

use super::model::QuoteDocument;
use crate::errors::{IntoCore, StorageError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_DATABASE: &str = "quotes";
const QUOTES_COLLECTION: &str = "quotes";

/// Quote storage backed by a MongoDB collection
pub struct MongoQuoteRepository {
    collection: Collection<QuoteDocument>,
}

impl MongoQuoteRepository {
    /// Connects to the server behind `uri` and checks it answers a ping.
    pub async fn connect(uri: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let database_name = options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(options)
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        let database = client.database(&database_name);

        bounded(database.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        info!("Connected to MongoDB database '{}'", database_name);

        Ok(Self::from_collection(
            database.collection::<QuoteDocument>(QUOTES_COLLECTION),
        ))
    }

    pub fn from_collection(collection: Collection<QuoteDocument>) -> Self {
        MongoQuoteRepository { collection }
    }
}

fn text_filter(text: Option<&str>) -> Document {
    match text {
        Some(text) => doc! { "text": text },
        None => doc! {},
    }
}

/// `skip` and `limit` values for one page.
fn skip_limit(pagination: Pagination) -> (u64, i64) {
    (pagination.offset(), i64::from(pagination.size()))
}

/// Picks the skip offset of a random document among `count`.
fn random_index<R: Rng>(count: u64, rng: &mut R) -> Result<u64> {
    if count == 0 {
        return Err(not_found());
    }
    Ok(rng.gen_range(0..count))
}

/// Runs a driver call under the per-operation timeout.
async fn bounded<T, F>(operation: F) -> std::result::Result<T, StorageError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    tokio::time::timeout(OPERATION_TIMEOUT, operation.into_future())
        .await
        .map_err(|_| StorageError::Timeout(OPERATION_TIMEOUT))?
        .map_err(StorageError::from)
}

#[async_trait]
impl QuoteRepositoryTrait for MongoQuoteRepository {
    async fn get_quotes(&self, pagination: Pagination) -> Result<Vec<Quote>> {
        let (skip, limit) = skip_limit(pagination);
        let documents: Vec<QuoteDocument> = bounded(async {
            self.collection
                .find(doc! {})
                .skip(skip)
                .limit(limit)
                .await?
                .try_collect::<Vec<QuoteDocument>>()
                .await
        })
        .await
        .into_core()?;

        Ok(documents.into_iter().map(Quote::from).collect())
    }

    async fn count_quotes(&self, text: Option<&str>) -> Result<u64> {
        bounded(self.collection.count_documents(text_filter(text)))
            .await
            .into_core()
    }

    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        let document = QuoteDocument::from(new_quote);
        bounded(self.collection.insert_one(&document))
            .await
            .into_core()?;
        Ok(Quote::from(document))
    }

    /// Deletes every document, then inserts the new ones.
    ///
    /// The two steps are not transactional: a failed insert leaves the
    /// collection empty.
    async fn set_quotes(&self, new_quotes: Vec<NewQuote>) -> Result<Vec<Quote>> {
        let documents: Vec<QuoteDocument> =
            new_quotes.into_iter().map(QuoteDocument::from).collect();

        let deleted = bounded(self.collection.delete_many(doc! {}))
            .await
            .into_core()?;
        debug!("{} quotes have been deleted", deleted.deleted_count);

        if !documents.is_empty() {
            bounded(self.collection.insert_many(&documents))
                .await
                .into_core()?;
        }

        Ok(documents.into_iter().map(Quote::from).collect())
    }

    async fn random_quote(&self) -> Result<Quote> {
        let count = self.count_quotes(None).await?;
        let index = random_index(count, &mut rand::thread_rng())?;
        let document = bounded(async {
            self.collection
                .find(doc! {})
                .skip(index)
                .limit(1)
                .await?
                .try_next()
                .await
        })
        .await
        .into_core()?;

        // The collection may have shrunk between the count and the read.
        document.map(Quote::from).ok_or_else(not_found)
    }
}

fn not_found() -> Error {
    DatabaseError::NotFound("quote not found".to_string()).into()
}
