//! Client for the remote demo task API.
//!
//! The API is a public placeholder service: it accepts and echoes task-shaped
//! JSON but never stores anything. The client is deliberately not connected
//! to [`TaskStore`](crate::libs::store::TaskStore); local mutations never
//! reach the network. It is reachable through the `remote` command only.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gtd::api::{RemoteConfig, RemoteTasks, TaskApi};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = RemoteTasks::new(&RemoteConfig::default());
//! for task in client.list().await? {
//!     println!("{:?} {}", task.id, task.title);
//! }
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

pub mod todos;

pub use todos::{RemoteConfig, RemoteTask, RemoteTasks};

/// The four operations exposed by the remote task endpoint.
///
/// Requests carry no authentication and are not retried; any non-2xx status
/// is returned as an error.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// Lists tasks, bounded by the configured demo limit.
    async fn list(&self) -> Result<Vec<RemoteTask>>;

    /// Creates a task and returns the server's echo, which carries the new id.
    async fn create(&self, task: &RemoteTask) -> Result<RemoteTask>;

    /// Replaces task `id`.
    async fn update(&self, id: i64, task: &RemoteTask) -> Result<RemoteTask>;

    /// Deletes task `id`.
    async fn delete(&self, id: i64) -> Result<()>;
}
