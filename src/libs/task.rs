use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, title: &str) -> Self {
        Task {
            id,
            title: title.to_string(),
            completed: false,
        }
    }
}

/// Completion-status filter applied to the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const VARIANTS: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Collection used when nothing valid has been saved yet.
pub fn seed_tasks() -> Vec<Task> {
    vec![Task::new(1, "Go shopping"), Task::new(2, "Eat lunch"), Task::new(3, "Do laundry")]
}
