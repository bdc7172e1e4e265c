use super::open_store;
use crate::{
    libs::{messages::Message, task::TaskFilter},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// ID of the task to complete or reopen
    id: i64,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let config = super::read_config();
    let mut store = open_store(&config)?;

    if !store.toggle_complete(args.id) {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
    } else if store.tasks().iter().any(|t| t.id == args.id && t.completed) {
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_success!(Message::TaskReopened(args.id));
    }

    super::render(&store, "", TaskFilter::All);
    Ok(())
}
