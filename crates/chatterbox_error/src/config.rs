//! Errors raised while loading accounts, configuration, and channel tables.

/// What part of the setup was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Layered configuration could not be built or deserialized.
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// Accounts file could not be read.
    #[display("Failed to read accounts file {}: {}", path, reason)]
    AccountsUnreadable {
        /// Path of the accounts file
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// Accounts file held no complete TOKEN/API_KEY pair.
    #[display("No accounts found in {}", _0)]
    NoAccounts(String),
    /// Workers were requested with no account to act through.
    #[display("At least one account is required")]
    NoPlatforms,
    /// The `[[channels]]` table is empty.
    #[display("No channels configured")]
    NoChannels,
    /// Channel id is not a Discord snowflake.
    #[display("Channel id must be numeric, got '{}'", _0)]
    InvalidChannelId(String),
    /// Same channel listed more than once.
    #[display("Channel {} configured twice", _0)]
    DuplicateChannel(String),
    /// Reply language outside `en`/`id`.
    #[display("Channel {}: language must be 'en' or 'id', got '{}'", channel, language)]
    UnsupportedLanguage {
        /// Channel id as configured
        channel: String,
        /// Rejected language code
        language: String,
    },
    /// `loop_interval_secs = 0` would spin the worker.
    #[display("Channel {}: loop_interval_secs must be greater than zero", _0)]
    ZeroLoopInterval(String),
    /// Channel settings could not be assembled.
    #[display("Channel {}: {}", channel, reason)]
    ChannelSettings {
        /// Channel id as configured
        channel: String,
        /// Builder failure
        reason: String,
    },
    /// A scalar setting is out of range.
    #[display("{} {}", field, reason)]
    InvalidSetting {
        /// Dotted setting name
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Setup error with source location tracking.
///
/// # Examples
///
/// ```
/// use chatterbox_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::DuplicateChannel("111".into()));
/// assert!(err.to_string().contains("configured twice"));
/// assert_eq!(err.kind(), &ConfigErrorKind::DuplicateChannel("111".into()));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What was rejected
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
