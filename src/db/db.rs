use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "gtd.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the database file inside the data directory.
    pub fn new(file_name: &str) -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn: Connection = Connection::open(path)?;

        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        Ok(Db {
            conn: Connection::open_in_memory()?,
        })
    }
}
