//! Storage drivers for the quotes API.
//!
//! This crate implements the `QuoteRepositoryTrait` defined in `quotes-core`
//! twice, and picks one at startup from the connection string:
//! - `mongodb://` / `mongodb+srv://`: a MongoDB collection
//! - `file://<path>`: a JSON array file kept in memory
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage (this crate)
//!        │           │
//!        ▼           ▼
//!     MongoDB    JSON file
//! ```

pub mod errors;
pub mod file;
pub mod mongo;
pub mod store;

pub use errors::{IntoCore, StorageError};
pub use file::FileQuoteRepository;
pub use mongo::MongoQuoteRepository;
pub use store::{Dsn, QuoteStore};

// Re-export from quotes-core for convenience
pub use quotes_core::errors::{DatabaseError, Error, Result};
