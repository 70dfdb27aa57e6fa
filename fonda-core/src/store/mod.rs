//! Durable key-value store
//!
//! Two logical keys hold the whole persisted state:
//!
//! | Key         | Value                        | Absent means         |
//! |-------------|------------------------------|----------------------|
//! | `menuItems` | JSON array of `Dish`         | empty catalog        |
//! | `dailyMenu` | JSON object of `DailyMenu`   | no draft yet         |
//!
//! Every mutation rewrites the full value for its key. Malformed JSON is
//! logged and treated as absent.

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Key of the dish catalog
pub const CATALOG_KEY: &str = "menuItems";

/// Key of the in-progress daily menu
pub const DAILY_MENU_KEY: &str = "dailyMenu";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Map onto the shared error code (the UI localizes from the code)
    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::Serialization(_) => ErrorCode::StorageCorrupted,
            StorageError::WriteRejected { .. } => ErrorCode::StorageWriteFailed,
            StorageError::Storage(redb::StorageError::Io(e))
                if e.kind() == std::io::ErrorKind::StorageFull =>
            {
                ErrorCode::StorageFull
            }
            _ => ErrorCode::DatabaseError,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Synchronous string key-value store
///
/// Single writer, single reader. Both calls either complete or fail
/// immediately; there is no partial-write state.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Drop `key`; absent keys are not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Read and decode a JSON value.
///
/// Returns `Ok(None)` when the key is absent or holds data that does not
/// decode as `T`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> StorageResult<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "Malformed data in store, treating as empty");
            Ok(None)
        }
    }
}

/// Encode a value as JSON and write it under `key`
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KvStore, key: &str, value: &T) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
