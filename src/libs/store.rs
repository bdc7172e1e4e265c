//! Authoritative in-memory holder of the task collection.
//!
//! [`TaskStore`] is created once per session by [`TaskStore::hydrate`] and is
//! then mutated only through its four operations. Every mutation writes the
//! whole collection back to the [`Storage`] as one JSON blob under a single
//! key.
//!
//! ## Hydration
//!
//! | Persisted value           | Resulting collection | Load error |
//! |---------------------------|----------------------|------------|
//! | key absent or empty       | seed                 | no         |
//! | valid JSON task array     | that array           | no         |
//! | unreadable / malformed    | seed                 | yes        |
//!
//! The seed is never written back by hydration itself.
//!
//! ## Persistence
//!
//! An empty collection is never written, so deleting every task and
//! restarting brings back the last saved non-empty collection. Write failures
//! are reported as warnings and never undo the in-memory change.
//!
//! ## Usage
//!
//! ```rust
//! use gtd::db::memory::MemoryStorage;
//! use gtd::libs::store::{TaskStore, DEFAULT_STORAGE_KEY};
//!
//! let mut store = TaskStore::hydrate(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
//! store.add_task("Buy milk").unwrap();
//! assert_eq!(store.tasks()[0].title, "Buy milk");
//! ```

use super::error::StoreError;
use super::filter;
use super::messages::Message;
use super::task::{seed_tasks, Task, TaskFilter};
use crate::db::Storage;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::Utc;
use std::collections::HashSet;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todoTasks";

pub struct TaskStore<S: Storage> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    load_error: Option<Message>,
}

impl<S: Storage> TaskStore<S> {
    /// Loads the collection saved under `key`, falling back to the seed.
    pub fn hydrate(storage: S, key: &str) -> Self {
        let (tasks, load_error) = match Self::load(&storage, key) {
            Ok(Some(tasks)) => {
                tracing::debug!(count = tasks.len(), key, "hydrated tasks from storage");
                (tasks, None)
            }
            Ok(None) => {
                msg_debug!(format!("No saved tasks under '{}', using defaults", key));
                (seed_tasks(), None)
            }
            Err(e) => {
                tracing::warn!(error = %e, key, "failed to hydrate tasks");
                (seed_tasks(), Some(Message::TasksLoadFailed))
            }
        };

        Self {
            storage,
            key: key.to_string(),
            tasks,
            load_error,
        }
    }

    fn load(storage: &S, key: &str) -> Result<Option<Vec<Task>>> {
        let blob = match storage.get(key)? {
            Some(blob) if !blob.is_empty() => blob,
            _ => return Ok(None),
        };
        let tasks: Vec<Task> = serde_json::from_str(&blob).map_err(StoreError::from)?;
        validate(&tasks)?;

        Ok(Some(tasks))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Error indicator raised by a failed hydration; stays set for the session.
    pub fn load_error(&self) -> Option<&Message> {
        self.load_error.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Tasks matching `search` and `filter`, in collection order.
    pub fn view<'a>(&'a self, search: &'a str, filter: TaskFilter) -> impl Iterator<Item = &'a Task> + 'a {
        filter::filter_tasks(&self.tasks, search, filter)
    }

    /// Prepends a new incomplete task and returns it.
    pub fn add_task(&mut self, title: &str) -> Result<&Task, StoreError> {
        ensure_title(title)?;

        let task = Task::new(self.next_id()?, title);
        tracing::info!(id = task.id, "task added");
        self.tasks.insert(0, task);
        self.persist();

        Ok(&self.tasks[0])
    }

    /// Replaces the title of task `id`. Returns `false` when no task has that id.
    pub fn edit_task(&mut self, id: i64, title: &str) -> Result<bool, StoreError> {
        ensure_title(title)?;

        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = title.to_string();
                true
            }
            None => false,
        };
        self.persist();

        Ok(found)
    }

    /// Removes task `id`. Returns `false` when no task has that id.
    pub fn remove_task(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        self.persist();

        removed
    }

    /// Flips the completion flag of task `id`. Returns `false` when no task has that id.
    pub fn toggle_complete(&mut self, id: i64) -> bool {
        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        };
        self.persist();

        found
    }

    /// Creation-time id, bumped past the largest existing id so rapid
    /// successive adds never collide.
    fn next_id(&self) -> Result<i64, StoreError> {
        let now = Utc::now().timestamp_millis();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now => max.checked_add(1).ok_or(StoreError::IdExhausted(max)),
            _ => Ok(now),
        }
    }

    fn persist(&mut self) {
        if self.tasks.is_empty() {
            tracing::debug!(key = %self.key, "collection is empty, skipping save");
            return;
        }

        let result = match serde_json::to_string(&self.tasks) {
            Ok(blob) => self.storage.set(&self.key, &blob),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            msg_warning!(Message::TasksSaveFailed(e.to_string()));
        }
    }
}

fn ensure_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(())
}

fn validate(tasks: &[Task]) -> Result<(), StoreError> {
    let mut ids = HashSet::new();
    for task in tasks {
        if !ids.insert(task.id) {
            return Err(StoreError::Invalid(format!("duplicate task id {}", task.id)));
        }
        if task.title.trim().is_empty() {
            return Err(StoreError::Invalid(format!("task {} has an empty title", task.id)));
        }
    }
    Ok(())
}
