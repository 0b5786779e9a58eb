//! Top-level error wrapper types.

use crate::{ConfigError, DiscordError, GeminiError, RateLimitError};

/// Every error a Chatterbox crate can surface.
///
/// # Examples
///
/// ```
/// use chatterbox_error::{ChatterboxError, ConfigError, ConfigErrorKind};
///
/// let err: ChatterboxError = ConfigError::new(ConfigErrorKind::NoChannels).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChatterboxErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Discord error
    #[from(DiscordError)]
    Discord(DiscordError),
    /// Key rotation error
    #[from(RateLimitError)]
    RateLimit(RateLimitError),
}

/// Chatterbox error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chatterbox_error::{ChatterboxResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> ChatterboxResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::NoAccounts("accounts.txt".into())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Chatterbox Error: {}", _0)]
pub struct ChatterboxError(Box<ChatterboxErrorKind>);

impl ChatterboxError {
    /// Create a new error from a kind.
    pub fn new(kind: ChatterboxErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChatterboxErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ChatterboxErrorKind
impl<T> From<T> for ChatterboxError
where
    T: Into<ChatterboxErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Chatterbox operations.
pub type ChatterboxResult<T> = std::result::Result<T, ChatterboxError>;
