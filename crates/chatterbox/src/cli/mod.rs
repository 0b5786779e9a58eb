//! Command-line interface module.

mod commands;
mod inspect;
mod run;

pub use commands::{Cli, Commands};
pub use inspect::{show_accounts, show_channels};
pub use run::run;

use chatterbox_bot::ChatterboxConfig;
use chatterbox_error::ChatterboxResult;
use std::path::Path;

/// Explicit file when given, layered discovery otherwise.
fn load_config(path: Option<&Path>) -> ChatterboxResult<ChatterboxConfig> {
    match path {
        Some(path) => ChatterboxConfig::from_file(path),
        None => ChatterboxConfig::load(),
    }
}
