//! Derivation of the displayed task subset and its counters.
//!
//! Nothing here is cached: every render recomputes from the current
//! collection, search term and filter, so a change to any of the three shows
//! up on the next derivation.

use super::task::{Task, TaskFilter};

/// Tasks whose title contains `search` (case-insensitive) and whose status
/// satisfies `filter`, in source order.
pub fn filter_tasks<'a>(tasks: &'a [Task], search: &str, filter: TaskFilter) -> impl Iterator<Item = &'a Task> + 'a {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(move |task| task.title.to_lowercase().contains(&needle) && filter.matches(task))
}

/// Counters over the full collection. The search term never affects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }

    /// Count shown on the button for `filter`.
    pub fn count(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.total,
            TaskFilter::Active => self.pending,
            TaskFilter::Completed => self.completed,
        }
    }
}
