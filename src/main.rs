//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use nfl_standings::{
    cli::{Commands, StandingsCli},
    commands::{handle_parse, handle_sum},
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI. Seasons are fetched one after another on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = StandingsCli::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Parse { source, json } => handle_parse(source, json).await?,
        Commands::Sum { source, json } => handle_sum(source, json).await?,
    }

    Ok(())
}
