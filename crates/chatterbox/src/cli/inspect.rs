//! `accounts` and `channels` commands.

use super::load_config;
use chatterbox_bot::{Supervisor, load_accounts};
use chatterbox_core::ChannelId;
use chatterbox_error::ChatterboxResult;
use std::path::Path;

/// Print every account's identity.
pub async fn show_accounts(config_path: Option<&Path>) -> ChatterboxResult<()> {
    let config = load_config(config_path)?;
    let accounts = load_accounts(&config.accounts_file)?;
    let supervisor = Supervisor::from_config(&config, &accounts)?;

    for (n, identity) in supervisor.identities().await.iter().enumerate() {
        println!("{:>3}  {}", n + 1, identity);
    }
    Ok(())
}

/// Print every channel's location and effective settings.
pub async fn show_channels(config_path: Option<&Path>) -> ChatterboxResult<()> {
    let config = load_config(config_path)?;
    config.validate()?;
    let accounts = load_accounts(&config.accounts_file)?;
    let supervisor = Supervisor::from_config(&config, &accounts)?;

    let plans = config.channel_plans()?;
    let channels: Vec<ChannelId> = plans.iter().map(|(id, _)| id.clone()).collect();
    let locations = supervisor.locations(&channels).await;

    for (n, ((channel, settings), location)) in plans.iter().zip(&locations).enumerate() {
        let account = supervisor.account_for(n) + 1;
        println!("[Channel {} | {}] account #{}", channel, location, account);
        println!("    {}", settings);
    }
    Ok(())
}
