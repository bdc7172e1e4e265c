use super::open_store;
use crate::{
    libs::{messages::Message, task::TaskFilter},
    msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to rename
    id: i64,
    /// New title; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let config = super::read_config();
    let mut store = open_store(&config)?;

    let title = args.title.join(" ");
    if store.edit_task(args.id, &title).map_err(|e| msg_error_anyhow!(e))? {
        msg_success!(Message::TaskUpdated(args.id));
    } else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
    }

    super::render(&store, "", TaskFilter::All);
    Ok(())
}
