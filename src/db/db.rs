use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

pub const DB_FILE_NAME: &str = "dosa.db";

const SCHEMA_STORE: &str = "CREATE TABLE IF NOT EXISTS store (
    namespace TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
)";
const UPSERT_VALUE: &str = "INSERT INTO store (namespace, value) VALUES (?1, ?2)
    ON CONFLICT(namespace) DO UPDATE SET value = excluded.value";
const SELECT_VALUE: &str = "SELECT value FROM store WHERE namespace = ?1";

/// Durable key-value storage backing every collection and scalar setting.
///
/// Each namespace holds one serialized value; collections are stored as
/// JSON arrays and scalars as plain text. Typed accessors in the sibling
/// modules own the (de)serialization per namespace.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the store at the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open_at(db_file_path)
    }

    /// Opens the store at an explicit path. Used by tests to run against
    /// a temporary location.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA_STORE, [])?;
        Ok(Db { conn })
    }

    /// Writes the serialized value for a namespace, replacing any
    /// previous value.
    pub fn save_raw(&self, namespace: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![namespace, value])?;
        Ok(())
    }

    /// Reads the serialized value for a namespace, or `None` when the
    /// namespace has never been written.
    pub fn load_raw(&self, namespace: &str) -> Result<Option<String>> {
        self.conn
            .query_row(SELECT_VALUE, params![namespace], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    pub fn has_namespace(&self, namespace: &str) -> Result<bool> {
        Ok(self.load_raw(namespace)?.is_some())
    }
}
