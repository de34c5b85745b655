//! Key-value blob storage
//!
//! The persistence collaborator: a flat string table addressed by fixed keys.
//! The daily log is stored wholesale under a single key.

use rusqlite::params;

use super::connection::{Database, DbResult};

/// Key-value store over the `kv_store` table
#[derive(Clone)]
pub struct KvStore {
    db: Database,
}

impl KvStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read the value stored under `key`, if any
    pub fn get(&self, key: &str) -> DbResult<Option<String>> {
        let conn = self.db.get_conn()?;
        let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0));
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `value` under `key`, replacing any previous value
    pub fn put(&self, key: &str, value: &str) -> DbResult<()> {
        let conn = self.db.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete the value stored under `key`
    /// Returns true if a value was present
    pub fn delete(&self, key: &str) -> DbResult<bool> {
        let conn = self.db.get_conn()?;
        let rows = conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(rows > 0)
    }
}
