//! Accounts file parsing.
//!
//! The file is a sequence of `TOKEN=` / `API_KEY=` line pairs:
//!
//! ```text
//! TOKEN=discord-token-1
//! API_KEY=gemini-key-1
//! TOKEN=discord-token-2
//! API_KEY=gemini-key-2
//! ```

use chatterbox_core::Account;
use chatterbox_error::{ChatterboxResult, ConfigError, ConfigErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// Parse account pairs from the accounts file contents.
///
/// Blank lines are ignored and each line is trimmed. A `TOKEN=` line starts
/// a pair and the next `API_KEY=` line completes it; the value is everything
/// after the first `=`. An `API_KEY=` with no pending token is dropped, as
/// is a trailing token with no key. A second `TOKEN=` before a key replaces
/// the pending token.
///
/// # Examples
///
/// ```
/// use chatterbox_bot::parse_accounts;
///
/// let accounts = parse_accounts("TOKEN=abc\nAPI_KEY=k=1\n\nTOKEN=orphan\n");
/// assert_eq!(accounts.len(), 1);
/// assert_eq!(accounts[0].api_key(), "k=1");
/// ```
pub fn parse_accounts(contents: &str) -> Vec<Account> {
    let mut accounts = Vec::new();
    let mut pending_token: Option<String> = None;

    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(token) = line.strip_prefix("TOKEN=") {
            pending_token = Some(token.trim().to_string());
        } else if let Some(api_key) = line.strip_prefix("API_KEY=") {
            if let Some(token) = pending_token.take() {
                accounts.push(Account::new(token, api_key.trim()));
            }
        }
    }

    accounts
}

/// Read and parse the accounts file. Zero accounts is an error.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_accounts(path: impl AsRef<Path>) -> ChatterboxResult<Vec<Account>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(ConfigErrorKind::AccountsUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let accounts = parse_accounts(&contents);
    if accounts.is_empty() {
        return Err(ConfigError::new(ConfigErrorKind::NoAccounts(path.display().to_string())).into());
    }

    debug!(count = accounts.len(), "Loaded accounts");
    Ok(accounts)
}
