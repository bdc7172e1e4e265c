//! # gtd - Get Things Done
//!
//! A command-line to-do list. Tasks are added, renamed, completed, deleted,
//! searched and filtered by status; the collection is kept in a local
//! SQLite key-value table and survives restarts.
//!
//! ## Layout
//!
//! - [`libs::store`]: the task store, the only owner of the collection
//! - [`libs::filter`]: search and status filtering, counters
//! - [`db`]: key-value persistence behind the store
//! - [`api`]: client for the remote demo task API (not used by the store)
//! - [`commands`]: the `clap` command-line interface
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gtd::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
