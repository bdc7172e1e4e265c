use super::open_store;
use crate::libs::task::TaskFilter;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    search: String,
    /// Completion status to show
    #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = super::read_config();
    let store = open_store(&config)?;

    super::render(&store, &args.search, args.filter);
    Ok(())
}
