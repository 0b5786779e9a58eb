//! TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`chatterbox.toml` shipped with the crate)
//! 2. `~/.config/chatterbox/chatterbox.toml`
//! 3. `./chatterbox.toml`, or an explicit path passed to [`ChatterboxConfig::from_file`]
//! 4. Environment variables such as `CHATTERBOX_GENERATION__MODEL`

use chatterbox_core::{ChannelId, ChannelSettings, ChannelSettingsBuilder, Language};
use chatterbox_error::{ChatterboxResult, ConfigError, ConfigErrorKind};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../chatterbox.toml");

/// Generation API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Model name, e.g. `gemini-2.5-flash`
    pub model: String,
    /// API root
    pub api_base: String,
    /// Wait after every key has been retired
    pub cooldown_secs: u64,
    /// Wait after a failure that keeps the key
    pub retry_backoff_secs: u64,
    /// Identical generations tolerated in a row; 0 regenerates forever
    pub max_regenerations: u32,
}

impl GenerationConfig {
    /// Regeneration cap as the generator expects it.
    pub fn regeneration_cap(&self) -> Option<u32> {
        (self.max_regenerations > 0).then_some(self.max_regenerations)
    }
}

/// Chat platform settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscordConfig {
    /// REST API root
    pub api_base: String,
}

/// Processed message record settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessedConfig {
    /// Most message ids remembered at once
    pub capacity: usize,
}

/// One `[[channels]]` entry.
///
/// ```toml
/// [[channels]]
/// id = "123456789012345678"
/// use_generation = true
/// language = "en"
/// read_delay_secs = 5
/// loop_interval_secs = 30
/// reply_as_thread = true
/// delete_after_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Channel snowflake
    pub id: String,
    /// Answer the latest message with generated text instead of broadcasting
    #[serde(default)]
    pub use_generation: bool,
    /// `en` or `id`
    #[serde(default = "default_language")]
    pub language: String,
    /// Wait before each read
    #[serde(default)]
    pub read_delay_secs: u64,
    /// Wait at the end of each iteration
    pub loop_interval_secs: u64,
    /// Honour the channel's slow mode before answering
    #[serde(default)]
    pub use_slow_mode: bool,
    /// Thread replies to the message being answered
    #[serde(default)]
    pub reply_as_thread: bool,
    /// Delete posted messages after this many seconds; 0 keeps them
    #[serde(default)]
    pub delete_after_secs: Option<u64>,
    /// Delete posted messages straight away
    #[serde(default)]
    pub delete_immediately: bool,
}

fn default_language() -> String {
    Language::English.to_string()
}

impl ChannelConfig {
    /// Validated channel id.
    pub fn channel_id(&self) -> Result<ChannelId, ConfigError> {
        let id = self.id.trim();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::new(ConfigErrorKind::InvalidChannelId(
                self.id.clone(),
            )));
        }
        Ok(ChannelId::new(id))
    }

    /// Validated worker settings.
    ///
    /// Broadcast channels never read, so their read delay and slow mode
    /// are forced off.
    pub fn settings(&self) -> Result<ChannelSettings, ConfigError> {
        let language: Language = self.language.trim().to_lowercase().parse().map_err(|_| {
            ConfigError::new(ConfigErrorKind::UnsupportedLanguage {
                channel: self.id.clone(),
                language: self.language.clone(),
            })
        })?;

        if self.loop_interval_secs == 0 {
            return Err(ConfigError::new(ConfigErrorKind::ZeroLoopInterval(
                self.id.clone(),
            )));
        }

        let (read_delay, use_slow_mode) = if self.use_generation {
            (Duration::from_secs(self.read_delay_secs), self.use_slow_mode)
        } else {
            (Duration::ZERO, false)
        };

        ChannelSettingsBuilder::default()
            .use_generation(self.use_generation)
            .language(language)
            .read_delay(read_delay)
            .loop_interval(Duration::from_secs(self.loop_interval_secs))
            .use_slow_mode(use_slow_mode)
            .reply_as_thread(self.reply_as_thread)
            .delete_after(self.delete_after_secs.map(Duration::from_secs))
            .delete_immediately(self.delete_immediately)
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::ChannelSettings {
                    channel: self.id.clone(),
                    reason: e.to_string(),
                })
            })
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatterboxConfig {
    /// TOKEN/API_KEY pairs file
    pub accounts_file: PathBuf,
    /// Static message pool, one message per line
    pub message_file: PathBuf,
    /// Generation API settings
    pub generation: GenerationConfig,
    /// Chat platform settings
    pub discord: DiscordConfig,
    /// Processed message record settings
    pub processed: ProcessedConfig,
    /// Monitored channels
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
}

impl ChatterboxConfig {
    /// Load with precedence: environment > `./chatterbox.toml` > home config > bundled defaults.
    ///
    /// Missing user files are skipped.
    #[instrument]
    pub fn load() -> ChatterboxResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/chatterbox/chatterbox.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("chatterbox").required(false));
        Self::finish(builder)
    }

    /// Load bundled defaults overridden by the file at `path` (required).
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ChatterboxResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::defaults().add_source(File::from(path.as_ref()).required(true));
        Self::finish(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ChatterboxResult<Self> {
        let config: Self = builder
            .add_source(
                Environment::with_prefix("CHATTERBOX")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;
        Ok(config)
    }

    /// Check everything a worker would otherwise trip over at runtime.
    ///
    /// Loading does not validate, so commands that only need the accounts
    /// can run before any channel is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.channel_plans().map(|_| ())?;

        if self.processed.capacity == 0 {
            return Err(ConfigError::new(ConfigErrorKind::InvalidSetting {
                field: "processed.capacity",
                reason: "must be greater than zero",
            }));
        }
        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::InvalidSetting {
                field: "generation.model",
                reason: "must not be empty",
            }));
        }
        Ok(())
    }

    /// Channel ids with their validated settings, in configuration order.
    pub fn channel_plans(&self) -> Result<Vec<(ChannelId, ChannelSettings)>, ConfigError> {
        if self.channels.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::NoChannels));
        }

        let mut seen = HashSet::new();
        self.channels
            .iter()
            .map(|channel| {
                let id = channel.channel_id()?;
                if !seen.insert(id.clone()) {
                    return Err(ConfigError::new(ConfigErrorKind::DuplicateChannel(
                        id.to_string(),
                    )));
                }
                Ok((id, channel.settings()?))
            })
            .collect()
    }

    /// Retry backoff as a duration.
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs(self.generation.retry_backoff_secs)
    }

    /// Key cooldown as a duration.
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.generation.cooldown_secs)
    }
}
