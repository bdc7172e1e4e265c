use anyhow::Result;
use gtd::commands::Cli;
use gtd::libs::messages::macros::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::menu().await
}
