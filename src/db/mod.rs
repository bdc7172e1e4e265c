//! Key-value persistence for the task collection.
//!
//! The store keeps the whole collection as a single serialized blob under one
//! fixed key, so the persistence layer only needs string get/set/remove.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gtd::db::{db::Db, local_storage::LocalStorage, Storage};
//!
//! let mut storage = LocalStorage::new(Db::new("gtd.db")?)?;
//! storage.set("todoTasks", "[]")?;
//! assert_eq!(storage.get("todoTasks")?.as_deref(), Some("[]"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod local_storage;
pub mod memory;

use anyhow::Result;

/// String key-value capability backing the task store.
pub trait Storage {
    /// Returns the value under `key`, or `None` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
