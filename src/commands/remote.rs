use crate::{
    api::{RemoteTask, RemoteTasks, TaskApi},
    libs::{messages::Message, view::View},
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    command: RemoteCommand,
}

#[derive(Debug, Subcommand)]
enum RemoteCommand {
    /// List tasks from the remote API
    List,
    /// Create a task on the remote API
    Create {
        /// Task title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Mark the task as completed
        #[arg(short, long)]
        completed: bool,
    },
    /// Replace a task on the remote API
    Update {
        /// Remote task ID
        id: i64,
        /// New title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Mark the task as completed
        #[arg(short, long)]
        completed: bool,
    },
    /// Delete a task on the remote API
    Delete {
        /// Remote task ID
        id: i64,
    },
}

pub async fn cmd(args: RemoteArgs) -> Result<()> {
    let config = super::read_config().remote();
    let client = RemoteTasks::new(&config);

    match args.command {
        RemoteCommand::List => handle_list(&client, &config.api_url).await,
        RemoteCommand::Create { title, completed } => handle_create(&client, title.join(" "), completed).await,
        RemoteCommand::Update { id, title, completed } => handle_update(&client, id, title.join(" "), completed).await,
        RemoteCommand::Delete { id } => handle_delete(&client, id).await,
    }
}

async fn handle_list(client: &impl TaskApi, api_url: &str) -> Result<()> {
    let tasks = client.list().await.map_err(request_failed)?;

    if tasks.is_empty() {
        msg_info!(Message::RemoteNoTasks);
        return Ok(());
    }

    msg_print!(Message::RemoteTasksHeader(api_url.to_string()), true);
    View::remote_tasks(&tasks);
    Ok(())
}

async fn handle_create(client: &impl TaskApi, title: String, completed: bool) -> Result<()> {
    if title.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskEmpty);
    }

    let created = client.create(&RemoteTask::new(&title, completed)).await.map_err(request_failed)?;
    msg_success!(Message::RemoteTaskCreated(created.title.clone()));
    View::remote_tasks(&[created]);
    Ok(())
}

async fn handle_update(client: &impl TaskApi, id: i64, title: String, completed: bool) -> Result<()> {
    if title.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskEmpty);
    }

    let mut task = RemoteTask::new(&title, completed);
    task.id = Some(id);
    let updated = client.update(id, &task).await.map_err(request_failed)?;
    msg_success!(Message::RemoteTaskUpdated(id));
    View::remote_tasks(&[updated]);
    Ok(())
}

async fn handle_delete(client: &impl TaskApi, id: i64) -> Result<()> {
    client.delete(id).await.map_err(request_failed)?;
    msg_success!(Message::RemoteTaskDeleted(id));
    Ok(())
}

fn request_failed(e: anyhow::Error) -> anyhow::Error {
    msg_error_anyhow!(Message::RemoteRequestFailed(e.to_string()))
}
