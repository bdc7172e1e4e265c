use super::filter::TaskStats;
use super::messages::Message;
use super::task::{Task, TaskFilter};
use crate::api::RemoteTask;
use crate::{msg_error, msg_print};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the filtered list followed by the counters.
    ///
    /// `stats` must be computed over the full collection, not over `tasks`.
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, stats: &TaskStats, filter: TaskFilter, load_error: Option<&Message>) {
        msg_print!(Message::AppTitle, true);

        let mut table = Table::new();
        table.add_row(row!["ID", "STATUS", "TITLE"]);
        for task in tasks {
            table.add_row(row![task.id, Self::status(task.completed), task.title]);
        }

        if table.len() == 1 {
            msg_print!(Message::TasksNotFound);
        } else {
            table.printstd();
        }

        msg_print!(Message::TaskStats {
            total: stats.total,
            completed: stats.completed,
            pending: stats.pending,
        });
        msg_print!(Self::filter_bar(stats, filter));

        if let Some(error) = load_error {
            msg_error!(error);
        }
    }

    pub fn remote_tasks(tasks: &[RemoteTask]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "USER", "STATUS", "TITLE"]);
        for task in tasks {
            table.add_row(row![
                task.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                task.user_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                Self::status(task.completed),
                task.title
            ]);
        }
        table.printstd();
    }

    /// `all (3)  active (2)  completed (1)` with the selected filter bracketed.
    pub fn filter_bar(stats: &TaskStats, selected: TaskFilter) -> String {
        TaskFilter::VARIANTS
            .iter()
            .map(|filter| {
                let label = format!("{} ({})", filter, stats.count(*filter));
                if *filter == selected {
                    format!("[{}]", label)
                } else {
                    label
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn status(completed: bool) -> &'static str {
        if completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}
