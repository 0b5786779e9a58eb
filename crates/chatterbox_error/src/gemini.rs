//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// The request never produced a response (connect, TLS, body read).
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Response body
        message: String,
    },
    /// Response body did not match the expected shape.
    #[display("Failed to parse Gemini response: {}", _0)]
    ResponseParse(String),
    /// Response had no candidate text.
    #[display("Gemini response contained no text")]
    EmptyResponse,
}

impl GeminiErrorKind {
    /// Whether the key used for the request must be retired.
    ///
    /// 404 means the key (or model) is invalid, 429 means the key hit its
    /// quota. Both are answered by switching to a different key.
    ///
    /// ```
    /// use chatterbox_error::GeminiErrorKind;
    ///
    /// let limited = GeminiErrorKind::HttpError { status_code: 429, message: String::new() };
    /// assert!(limited.requires_key_rotation());
    ///
    /// let server = GeminiErrorKind::HttpError { status_code: 500, message: String::new() };
    /// assert!(!server.requires_key_rotation());
    /// ```
    pub fn requires_key_rotation(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::HttpError {
                status_code: 404 | 429,
                ..
            }
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use chatterbox_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GeminiErrorKind {
        &self.kind
    }
}

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;
