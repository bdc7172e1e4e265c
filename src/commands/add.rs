use super::open_store;
use crate::{
    libs::{messages::Message, task::TaskFilter},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = super::read_config();
    let mut store = open_store(&config)?;

    let title = args.title.join(" ");
    let task = store.add_task(&title).map_err(|e| msg_error_anyhow!(e))?;
    msg_success!(Message::TaskCreated(task.title.clone()));

    super::render(&store, "", TaskFilter::All);
    Ok(())
}
