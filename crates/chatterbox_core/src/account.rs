//! Credential pairs.

use derive_getters::Getters;

/// One chat account and the generation API key loaded alongside it.
///
/// Loaded once at startup and never mutated. `Debug` hides both secrets.
///
/// # Examples
///
/// ```
/// use chatterbox_core::Account;
///
/// let account = Account::new("discord-token", "gemini-key");
/// assert_eq!(account.token(), "discord-token");
/// assert!(!format!("{:?}", account).contains("gemini-key"));
/// ```
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct Account {
    /// Chat platform token, sent verbatim in the `Authorization` header
    token: String,
    /// Generation API key contributed to the shared key pool
    api_key: String,
}

impl Account {
    /// Create an account from its two credentials.
    pub fn new(token: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("token_len", &self.token.len())
            .field("api_key_len", &self.api_key.len())
            .finish()
    }
}
