use std::io::ErrorKind;
use std::ops::Range;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use quotes_core::errors::DatabaseError;
use quotes_core::quotes::{NewQuote, Pagination, Quote, QuoteRepositoryTrait};
use quotes_core::Result;
use rand::seq::SliceRandom;
use tokio::fs;
use tokio::sync::RwLock;

use super::model::QuoteEntry;
use crate::errors::{IntoCore, StorageError};

/// Quote storage backed by a single JSON array file.
///
/// The whole collection is kept in memory; every write rewrites the file.
pub struct FileQuoteRepository {
    path: PathBuf,
    entries: RwLock<Vec<QuoteEntry>>,
}

impl FileQuoteRepository {
    /// Loads the collection from `path`. A missing or blank file is an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = load_entries(&path).await?;
        info!(
            "Loaded {} quotes from file {}",
            entries.len(),
            path.display()
        );

        Ok(FileQuoteRepository {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `entries` over the file. Callers hold the write lock.
    async fn persist(&self, entries: &[QuoteEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.into_core()?;
            }
        }
        let json = serde_json::to_vec_pretty(entries).into_core()?;
        fs::write(&self.path, json).await.into_core()
    }
}

async fn load_entries(path: &Path) -> Result<Vec<QuoteEntry>> {
    let raw = match fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::from(e).into()),
    };
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&raw).into_core()
}

/// Index range covered by `pagination`, or `None` past the end.
fn page_window(total: usize, pagination: Pagination) -> Option<Range<usize>> {
    let start = usize::try_from(pagination.offset()).ok()?;
    if start >= total {
        return None;
    }
    let end = start.saturating_add(pagination.size() as usize).min(total);
    Some(start..end)
}

#[async_trait]
impl QuoteRepositoryTrait for FileQuoteRepository {
    async fn get_quotes(&self, pagination: Pagination) -> Result<Vec<Quote>> {
        let entries = self.entries.read().await;
        let Some(window) = page_window(entries.len(), pagination) else {
            return Ok(Vec::new());
        };
        Ok(entries[window].iter().cloned().map(Quote::from).collect())
    }

    async fn count_quotes(&self, text: Option<&str>) -> Result<u64> {
        let entries = self.entries.read().await;
        let count = match text {
            Some(text) => entries.iter().filter(|e| e.text == text).count(),
            None => entries.len(),
        };
        Ok(count as u64)
    }

    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        let mut entries = self.entries.write().await;
        let entry = QuoteEntry::from(new_quote);

        let mut updated = entries.clone();
        updated.push(entry.clone());
        self.persist(&updated).await?;
        *entries = updated;

        Ok(Quote::from(entry))
    }

    /// Overwrites the file with the new collection.
    ///
    /// A failed write may leave the file truncated while the in-memory
    /// collection keeps its previous content.
    async fn set_quotes(&self, new_quotes: Vec<NewQuote>) -> Result<Vec<Quote>> {
        let mut entries = self.entries.write().await;
        let replacement: Vec<QuoteEntry> = new_quotes.into_iter().map(QuoteEntry::from).collect();

        self.persist(&replacement).await?;
        debug!(
            "Replaced {} quotes with {} in {}",
            entries.len(),
            replacement.len(),
            self.path.display()
        );
        *entries = replacement.clone();

        Ok(replacement.into_iter().map(Quote::from).collect())
    }

    async fn random_quote(&self) -> Result<Quote> {
        let entries = self.entries.read().await;
        entries
            .choose(&mut rand::thread_rng())
            .cloned()
            .map(Quote::from)
            .ok_or_else(|| DatabaseError::NotFound("quote not found".to_string()).into())
    }
}
