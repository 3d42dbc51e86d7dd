use anyhow::Result;
use clap::Parser;

use flashdeck::{
    cli::{Cli, Commands},
    runtime::Orchestrator,
    utils::{init_logger, LogTarget},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // The study screen owns the terminal, so it only logs to a file
    let interactive = matches!(cli.command, None | Some(Commands::Study));
    if let Some(path) = &cli.log_file {
        init_logger(LogTarget::File(path), cli.verbose)?;
    } else if cli.verbose && !interactive {
        init_logger(LogTarget::Stderr, cli.verbose)?;
    }

    let orchestrator = Orchestrator::new(cli)?;
    orchestrator.run().await
}
