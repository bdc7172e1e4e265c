pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod remote;
pub mod toggle;

use crate::{
    db::{db::Db, local_storage::LocalStorage, Storage},
    libs::{
        config::Config,
        filter::TaskStats,
        messages::Message,
        store::TaskStore,
        task::TaskFilter,
        view::View,
    },
    msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Rename a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as completed or active again", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Show tasks, optionally searched and filtered by status")]
    List(list::ListArgs),
    #[command(about = "Talk to the remote demo task API")]
    Remote(remote::RemoteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Remote(args) => remote::cmd(args).await,
        }
    }
}

/// Reads the configuration, falling back to defaults when the file is unusable.
fn read_config() -> Config {
    Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    })
}

/// Opens the configured storage and hydrates the task store from it.
pub fn open_store(config: &Config) -> Result<TaskStore<LocalStorage>> {
    let storage = config.storage();
    let local_storage = LocalStorage::new(Db::new(&storage.db_file)?)?;

    Ok(TaskStore::hydrate(local_storage, &storage.key))
}

fn render<S: Storage>(store: &TaskStore<S>, search: &str, filter: TaskFilter) {
    let stats = TaskStats::of(store.tasks());
    View::tasks(store.view(search, filter), &stats, filter, store.load_error());
}
