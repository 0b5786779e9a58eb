//! `run` command: the full startup sequence.

use super::load_config;
use chatterbox_bot::{ChannelPlan, Supervisor, load_accounts};
use chatterbox_core::{AccountIdentity, ChannelId};
use chatterbox_error::ChatterboxResult;
use std::path::Path;
use tracing::{error, info};

/// Load, introspect, spawn workers, and block until Ctrl-C.
pub async fn run(config_path: Option<&Path>) -> ChatterboxResult<()> {
    let config = load_config(config_path)?;
    config.validate()?;
    let accounts = load_accounts(&config.accounts_file)?;

    info!(model = %config.generation.model, "Using Gemini model");
    info!(count = accounts.len(), "Loaded accounts successfully");

    let supervisor = Supervisor::from_config(&config, &accounts)?;
    let identities = supervisor.identities().await;

    let plans = config.channel_plans()?;
    let channels: Vec<ChannelId> = plans.iter().map(|(id, _)| id.clone()).collect();
    let locations = supervisor.locations(&channels).await;

    for ((channel, settings), location) in plans.iter().zip(&locations) {
        info!("[Channel {} | {}] Settings: {}", channel, location, settings);
    }

    let workers = supervisor.spawn(plans.into_iter().map(ChannelPlan::from));
    for worker in &workers {
        let identity = identities
            .get(worker.account)
            .cloned()
            .unwrap_or_else(AccountIdentity::unknown);
        info!(channel_id = %worker.channel, "Bot active: {}", identity);
    }

    info!("Running on {} channel(s). Press Ctrl-C to stop.", workers.len());
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }

    info!("Shutting down");
    for worker in workers {
        worker.handle.abort();
    }
    Ok(())
}
