//! Core library modules.
//!
//! ## Usage
//!
//! ```rust
//! use gtd::db::memory::MemoryStorage;
//! use gtd::libs::filter::TaskStats;
//! use gtd::libs::store::{TaskStore, DEFAULT_STORAGE_KEY};
//! use gtd::libs::task::TaskFilter;
//!
//! let store = TaskStore::hydrate(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
//! let active: Vec<_> = store.view("", TaskFilter::Active).collect();
//! assert_eq!(active.len(), TaskStats::of(store.tasks()).pending);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod messages;
pub mod store;
pub mod task;
pub mod view;
