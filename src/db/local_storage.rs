use super::db::Db;
use super::Storage;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_STORAGE: &str = "CREATE TABLE IF NOT EXISTS storage (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?, ?, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM storage WHERE key = ?";

/// SQLite-backed key-value table, the on-disk counterpart of browser local storage.
pub struct LocalStorage {
    pub conn: Connection,
}

impl LocalStorage {
    pub fn new(db: Db) -> Result<LocalStorage> {
        db.conn.execute(SCHEMA_STORAGE, [])?;

        Ok(LocalStorage { conn: db.conn })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.conn.query_row(SELECT_VALUE, params![key], |row| row.get(0)).optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn.execute(DELETE_VALUE, params![key])?;

        Ok(())
    }
}
