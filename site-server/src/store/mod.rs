//! redb-based Record Store
//!
//! Named collections of serialized records, one JSON array per collection
//! key. This is the single persistence facility behind bookings,
//! pre-orders and the menu catalog.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `collections` | collection name | JSON array of records | Full record sequences |
//!
//! # Contract
//!
//! - [`RecordStore::load_all`] returns the persisted sequence for a
//!   collection, or an empty sequence when the key is absent. A stored
//!   value that fails to deserialize is treated as "no data" (logged,
//!   never propagated) so one corrupted write cannot wedge the site.
//! - [`RecordStore::save_all`] serializes and fully overwrites the
//!   sequence under the key. There is no partial update.
//!
//! The load/save pair has no cross-call atomicity. The deployment is a
//! single site process writing each collection; racing writers on the
//! same key are last-writer-wins.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Table for record collections: key = collection name, value = JSON array
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Collection key for table bookings
pub const BOOKINGS: &str = "bookings";
/// Collection key for food pre-orders
pub const PREORDERS: &str = "preorders";
/// Collection key for the menu catalog
pub const MENU: &str = "menu";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
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
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store backed by redb
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Open or create the database at the given path
    ///
    /// redb commits are durable as soon as `commit()` returns and the
    /// database file stays consistent across crashes, which is all the
    /// durability this service promises.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        // Create the table so reads on a fresh database find it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load the full record sequence for a collection
    ///
    /// Missing key → empty. A value that no longer parses as `Vec<T>` is
    /// also treated as empty: the store recovers rather than failing the
    /// request, and the next `save_all` replaces the bad bytes.
    pub fn load_all<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        match table.get(collection)? {
            Some(value) => match serde_json::from_slice(value.value()) {
                Ok(records) => Ok(records),
                Err(e) => {
                    tracing::warn!(
                        collection = collection,
                        error = %e,
                        "Stored collection failed to parse, treating as empty"
                    );
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and overwrite the full record sequence for a collection
    pub fn save_all<T: Serialize>(&self, collection: &str, records: &[T]) -> StoreResult<()> {
        let value = serde_json::to_vec(records)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(collection, value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Number of records stored under a collection (0 when absent/corrupt)
    pub fn count(&self, collection: &str) -> StoreResult<usize> {
        Ok(self.load_all::<serde_json::Value>(collection)?.len())
    }

    /// Insert raw bytes under a collection key (corruption tests)
    #[cfg(test)]
    pub fn save_raw(&self, collection: &str, bytes: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(collection, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
