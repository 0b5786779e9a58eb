//! Discord-specific error types.
//!
//! Covers transport failures talking to the Discord REST API, non-success
//! statuses, and response bodies that do not match the expected shape.

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// The request never produced a response.
    #[display("HTTP error: {_0}")]
    Http(String),

    /// Discord answered with a non-success status.
    #[display("Discord API returned {status}: {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Response body could not be decoded.
    #[display("Failed to parse Discord response: {_0}")]
    Parse(String),

    /// Token is invalid or expired (HTTP 401), with the response body.
    #[display("Invalid or expired token (status 401): {_0}")]
    InvalidToken(String),

    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),
}

/// Discord error with source location tracking.
///
/// Captures the error kind along with the file and line where the error occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    /// The kind of error that occurred
    pub kind: DiscordErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use chatterbox_error::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::InvalidToken(String::new()));
    /// assert_eq!(err.kind(), &DiscordErrorKind::InvalidToken(String::new()));
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiscordErrorKind {
        &self.kind
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;
