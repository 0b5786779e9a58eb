//! Chatterbox CLI binary.
//!
//! - `run`: start one worker per configured channel and wait for Ctrl-C
//! - `accounts`: show who each account is logged in as
//! - `channels`: show where each channel lives and how it will be worked

use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run, show_accounts, show_channels};

    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Run { config } => run(config.as_deref()).await?,
        Commands::Accounts { config } => show_accounts(config.as_deref()).await?,
        Commands::Channels { config } => show_channels(config.as_deref()).await?,
    }

    Ok(())
}
