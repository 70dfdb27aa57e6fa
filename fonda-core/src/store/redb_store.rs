//! redb-backed store
//!
//! A single table `kv: &str -> &str`. redb commits with
//! `Durability::Immediate` by default, so a value is persistent as soon as
//! `set` returns.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use super::{KvStore, StorageResult};

/// Table for all keys: key = logical name, value = JSON text
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Key-value store backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so read transactions never miss it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        tracing::debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CATALOG_KEY, DAILY_MENU_KEY};

    #[test]
    fn test_in_memory_get_set_remove() {
        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(store.get(CATALOG_KEY).unwrap(), None);

        store.set(CATALOG_KEY, "[]").unwrap();
        assert_eq!(store.get(CATALOG_KEY).unwrap().as_deref(), Some("[]"));

        store.set(CATALOG_KEY, "[1]").unwrap();
        assert_eq!(store.get(CATALOG_KEY).unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.get(DAILY_MENU_KEY).unwrap(), None);

        store.remove(CATALOG_KEY).unwrap();
        assert_eq!(store.get(CATALOG_KEY).unwrap(), None);
        // Removing again is fine
        store.remove(CATALOG_KEY).unwrap();
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonda.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.set(DAILY_MENU_KEY, r#"{"date":"2024-10-03"}"#).unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.get(DAILY_MENU_KEY).unwrap().as_deref(),
            Some(r#"{"date":"2024-10-03"}"#)
        );
    }
}
