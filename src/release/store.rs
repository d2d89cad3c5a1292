use std::path::Path;
use std::sync::{Mutex, MutexGuard};

#[cfg(test)]
use mockall::automock;

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::release::error::StoreError;

/// Last release the notifier announced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub version: String,
    /// Detection date, `YYYY-MM-DD`
    pub date: String,
}

/// Trait for storing and retrieving version records
#[cfg_attr(test, automock)]
pub trait VersionStore: Send + Sync {
    /// Look up the record for `version`; `Ok(None)` when it was never stored
    fn get(&self, version: &str) -> Result<Option<VersionRecord>, StoreError>;

    /// All records in the collection
    fn list(&self) -> Result<Vec<VersionRecord>, StoreError>;

    /// Delete every record in the collection, then create `record`
    fn replace_all(&self, record: &VersionRecord) -> Result<(), StoreError>;
}

/// Document path for a version record: `<collection>/<version>`
pub fn key(collection: &str, version: &str) -> String {
    format!("{}/{}", collection, version)
}

/// SQLite-backed document store holding one collection
pub struct SqliteVersionStore {
    conn: Mutex<Connection>,
    collection: String,
}

impl SqliteVersionStore {
    pub fn new(db_path: &Path, collection: &str) -> Result<Self, StoreError> {
        info!("Initializing version store at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode so overlapping requests don't block readers
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn, collection)
    }

    pub fn open_in_memory(collection: &str) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?, collection)
    }

    fn with_connection(conn: Connection, collection: &str) -> Result<Self, StoreError> {
        let store = Self {
            conn: Mutex::new(conn),
            collection: collection.to_string(),
        };

        store.create_schema()?;
        debug!("Version store ready for collection {}", collection);

        Ok(store)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                path TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                version TEXT NOT NULL,
                date TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)",
            [],
        )?;

        Ok(())
    }
}

impl VersionStore for SqliteVersionStore {
    fn get(&self, version: &str) -> Result<Option<VersionRecord>, StoreError> {
        let conn = self.lock_conn()?;
        let record = conn
            .query_row(
                "SELECT version, date FROM documents WHERE path = ?1",
                [key(&self.collection, version)],
                |row| {
                    Ok(VersionRecord {
                        version: row.get(0)?,
                        date: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    fn list(&self) -> Result<Vec<VersionRecord>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt =
            conn.prepare("SELECT version, date FROM documents WHERE collection = ?1 ORDER BY path")?;

        let records = stmt
            .query_map([&self.collection], |row| {
                Ok(VersionRecord {
                    version: row.get(0)?,
                    date: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn replace_all(&self, record: &VersionRecord) -> Result<(), StoreError> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let deleted = tx.execute(
            "DELETE FROM documents WHERE collection = ?1",
            [&self.collection],
        )?;
        debug!("Deleted {} old version records", deleted);

        tx.execute(
            "INSERT INTO documents (path, collection, version, date) VALUES (?1, ?2, ?3, ?4)",
            (
                key(&self.collection, &record.version),
                &self.collection,
                &record.version,
                &record.date,
            ),
        )?;

        tx.commit()?;

        debug!("Stored version record {}", record.version);
        Ok(())
    }
}
