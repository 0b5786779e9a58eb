//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chatterbox - multi-account Discord auto-reply and broadcast client
#[derive(Parser, Debug)]
#[command(name = "chatterbox")]
#[command(about = "Multi-account Discord auto-reply and broadcast client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start one worker per configured channel and run until Ctrl-C
    Run {
        /// Configuration file (defaults to ./chatterbox.toml and ~/.config/chatterbox/chatterbox.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the identity behind every account
    Accounts {
        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show every channel's location and effective settings
    Channels {
        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
