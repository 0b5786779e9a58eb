//! Worker supervision: shared state construction and worker spawning.

use crate::{ChannelWorker, ChatterboxConfig, ProcessedMessages};
use chatterbox_core::{Account, AccountIdentity, ChannelId, ChannelLocation, ChannelSettings};
use chatterbox_error::{ChatterboxResult, ConfigError, ConfigErrorKind};
use chatterbox_interface::ChatPlatform;
use chatterbox_models::{GeminiClient, MessagePool, ReplyGenerator};
use chatterbox_rate_limit::KeyRotator;
use chatterbox_social::{DiscordClient, resolve_channel, resolve_identity};
use derive_getters::Getters;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// A channel and the settings its worker runs with.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ChannelPlan {
    channel: ChannelId,
    settings: ChannelSettings,
}

impl ChannelPlan {
    /// Pair a channel with its settings.
    pub fn new(channel: ChannelId, settings: ChannelSettings) -> Self {
        Self { channel, settings }
    }
}

impl From<(ChannelId, ChannelSettings)> for ChannelPlan {
    fn from((channel, settings): (ChannelId, ChannelSettings)) -> Self {
        Self::new(channel, settings)
    }
}

/// A running worker.
#[derive(Debug)]
pub struct SpawnedWorker {
    /// Monitored channel
    pub channel: ChannelId,
    /// Index of the account the worker acts as
    pub account: usize,
    /// Worker task
    pub handle: JoinHandle<()>,
}

/// Owns the state shared by every worker and launches them.
pub struct Supervisor {
    platforms: Vec<Arc<dyn ChatPlatform>>,
    generator: Arc<ReplyGenerator>,
    processed: Arc<ProcessedMessages>,
}

impl std::fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Supervisor")
            .field("accounts", &self.platforms.len())
            .field("generator", &self.generator)
            .field("processed", &self.processed.len())
            .finish()
    }
}

impl Supervisor {
    /// Supervise workers acting through `platforms`, one per account.
    pub fn new(
        platforms: Vec<Arc<dyn ChatPlatform>>,
        generator: Arc<ReplyGenerator>,
        processed: Arc<ProcessedMessages>,
    ) -> ChatterboxResult<Self> {
        if platforms.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::NoPlatforms).into());
        }
        Ok(Self {
            platforms,
            generator,
            processed,
        })
    }

    /// Build the Discord and Gemini clients, key rotator, and shared stores.
    #[instrument(skip_all, fields(accounts = accounts.len()))]
    pub fn from_config(config: &ChatterboxConfig, accounts: &[Account]) -> ChatterboxResult<Self> {
        let platforms = accounts
            .iter()
            .map(|account| {
                Arc::new(
                    DiscordClient::new(account.token().clone())
                        .with_api_base(config.discord.api_base.clone()),
                ) as Arc<dyn ChatPlatform>
            })
            .collect();

        let rotator = Arc::new(KeyRotator::new(
            accounts.iter().map(|account| account.api_key().clone()),
            config.cooldown(),
        )?);

        let backend = Arc::new(
            GeminiClient::new(config.generation.model.clone())
                .with_api_base(config.generation.api_base.clone()),
        );

        let generator = ReplyGenerator::new(
            backend,
            rotator,
            MessagePool::new(config.message_file.clone()),
        )
        .with_retry_backoff(config.retry_backoff())
        .with_max_regenerations(config.generation.regeneration_cap());

        Self::new(
            platforms,
            Arc::new(generator),
            Arc::new(ProcessedMessages::new(config.processed.capacity)),
        )
    }

    /// Number of accounts.
    pub fn account_count(&self) -> usize {
        self.platforms.len()
    }

    /// Account index serving the `n`th channel.
    pub fn account_for(&self, n: usize) -> usize {
        n % self.platforms.len()
    }

    /// Shared reply generator.
    pub fn generator(&self) -> &Arc<ReplyGenerator> {
        &self.generator
    }

    /// Shared processed message record.
    pub fn processed(&self) -> &Arc<ProcessedMessages> {
        &self.processed
    }

    /// Resolve every account's identity, in account order.
    pub async fn identities(&self) -> Vec<AccountIdentity> {
        let mut identities = Vec::with_capacity(self.platforms.len());
        for platform in &self.platforms {
            let identity = resolve_identity(platform.as_ref()).await;
            info!("Account: {}", identity);
            identities.push(identity);
        }
        identities
    }

    /// Resolve channel locations using the first account.
    pub async fn locations(&self, channels: &[ChannelId]) -> Vec<ChannelLocation> {
        let mut locations = Vec::with_capacity(channels.len());
        // `new` guarantees at least one platform.
        if let Some(platform) = self.platforms.first() {
            for channel in channels {
                let location = resolve_channel(platform.as_ref(), channel).await;
                info!(channel_id = %channel, "Connected to {}", location);
                locations.push(location);
            }
        }
        locations
    }

    /// Spawn one worker per plan, assigning accounts round-robin.
    pub fn spawn(&self, plans: impl IntoIterator<Item = ChannelPlan>) -> Vec<SpawnedWorker> {
        plans
            .into_iter()
            .enumerate()
            .map(|(n, plan)| {
                let account = self.account_for(n);
                let ChannelPlan { channel, settings } = plan;
                let worker = ChannelWorker::new(
                    channel.clone(),
                    settings,
                    Arc::clone(&self.platforms[account]),
                    Arc::clone(&self.generator),
                    Arc::clone(&self.processed),
                );
                debug!(channel_id = %channel, account, "Spawning worker");
                SpawnedWorker {
                    channel,
                    account,
                    handle: tokio::spawn(worker.run()),
                }
            })
            .collect()
    }
}
