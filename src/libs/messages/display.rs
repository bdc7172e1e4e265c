//! Display implementation for application messages.
//!
//! Converts structured [`Message`] values into the text shown in the
//! terminal. Keeping every string in one match makes wording changes a
//! one-file edit and lets the compiler flag any variant without text.
//!
//! ```rust
//! use gtd::libs::messages::Message;
//!
//! assert_eq!(Message::TaskEmpty.to_string(), "Task cannot be empty!");
//! assert_eq!(Message::TaskDeleted(7).to_string(), "Task 7 deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::AppTitle => "Get Things Done!".to_string(),
            Message::TaskCreated(title) => format!("Task '{}' added", title),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} marked as active", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskEmpty => "Task cannot be empty!".to_string(),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksLoadFailed => "Failed to load tasks".to_string(),
            Message::TasksSaveFailed(error) => format!("Failed to save tasks: {}", error),
            Message::TaskStats { total, completed, pending } => {
                format!("Total: {}  Completed: {}  Pending: {}", total, completed, pending)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file to delete".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleRemote => "Remote API settings".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),

            // === REMOTE API MESSAGES ===
            Message::RemoteTasksHeader(url) => format!("Tasks from {}", url),
            Message::RemoteNoTasks => "The remote API returned no tasks".to_string(),
            Message::RemoteTaskCreated(title) => format!("Remote task '{}' created", title),
            Message::RemoteTaskUpdated(id) => format!("Remote task {} updated", id),
            Message::RemoteTaskDeleted(id) => format!("Remote task {} deleted", id),
            Message::RemoteRequestFailed(error) => format!("Remote request failed: {}", error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptStorageKey => "Storage key for the task collection".to_string(),
            Message::PromptStorageDbFile => "Database file name".to_string(),
            Message::PromptRemoteApiUrl => "Remote API base URL".to_string(),
            Message::PromptRemoteLimit => "Number of remote tasks to list".to_string(),
        };

        write!(f, "{}", text)
    }
}
