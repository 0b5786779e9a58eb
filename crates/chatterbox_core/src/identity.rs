//! Account and channel identity payloads.

use crate::{ChannelId, GuildId, UserId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Placeholder for an unresolved account field.
pub const UNKNOWN: &str = "Unknown";
/// Placeholder for an unresolved server name.
pub const UNKNOWN_SERVER: &str = "Unknown Server";
/// Placeholder for an unresolved channel name.
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";
/// Server name reported for channels outside any guild.
pub const DIRECT_MESSAGE: &str = "Direct Message";

/// `GET /users/@me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CurrentUser {
    /// Account user id
    id: UserId,
    /// Account username
    #[serde(default)]
    username: String,
    /// Legacy discriminator, `"0"` or empty for migrated accounts
    #[serde(default)]
    discriminator: String,
}

impl CurrentUser {
    /// Build a user payload directly.
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        discriminator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            discriminator: discriminator.into(),
        }
    }
}

/// `GET /channels/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChannelInfo {
    /// Channel id
    id: ChannelId,
    /// Channel name, absent for direct messages
    #[serde(default)]
    name: Option<String>,
    /// Owning guild, absent for direct messages
    #[serde(default)]
    guild_id: Option<GuildId>,
    /// Slow-mode delay in seconds
    #[serde(default)]
    rate_limit_per_user: u64,
}

impl ChannelInfo {
    /// Build a channel payload directly.
    pub fn new(
        id: impl Into<ChannelId>,
        name: Option<String>,
        guild_id: Option<GuildId>,
        rate_limit_per_user: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            guild_id,
            rate_limit_per_user,
        }
    }
}

/// `GET /guilds/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GuildInfo {
    /// Guild name
    #[serde(default)]
    name: Option<String>,
}

impl GuildInfo {
    /// Build a guild payload directly.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Who an account is, with placeholders when the lookup failed.
///
/// # Examples
///
/// ```
/// use chatterbox_core::AccountIdentity;
///
/// let who = AccountIdentity::unknown();
/// assert_eq!(who.to_string(), "Unknown# (ID: Unknown)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_more::Display)]
#[display("{}#{} (ID: {})", username, discriminator, id)]
pub struct AccountIdentity {
    username: String,
    discriminator: String,
    id: String,
}

impl AccountIdentity {
    /// Identity reported when the account could not be resolved.
    pub fn unknown() -> Self {
        Self {
            username: UNKNOWN.to_string(),
            discriminator: String::new(),
            id: UNKNOWN.to_string(),
        }
    }
}

impl From<CurrentUser> for AccountIdentity {
    fn from(user: CurrentUser) -> Self {
        Self {
            username: if user.username.is_empty() {
                UNKNOWN.to_string()
            } else {
                user.username
            },
            discriminator: user.discriminator,
            id: user.id.to_string(),
        }
    }
}

/// Where a channel lives, with placeholders when the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_more::Display)]
#[display("Server: {} | Channel: {}", server_name, channel_name)]
pub struct ChannelLocation {
    server_name: String,
    channel_name: String,
}

impl ChannelLocation {
    /// Build a location from resolved names.
    pub fn new(server_name: impl Into<String>, channel_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            channel_name: channel_name.into(),
        }
    }

    /// Location reported when the channel could not be resolved.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_SERVER, UNKNOWN_CHANNEL)
    }
}
