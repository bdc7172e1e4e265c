use super::open_store;
use crate::{
    libs::{messages::Message, task::TaskFilter},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i64,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = super::read_config();
    let mut store = open_store(&config)?;

    if store.remove_task(args.id) {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
    }

    super::render(&store, "", TaskFilter::All);
    Ok(())
}
