//! Read-only lookups used for startup logging and slow-mode pacing.
//!
//! None of these fail: a lookup error is logged and replaced by a
//! placeholder so a worker can keep running with degraded labels.

use chatterbox_core::{
    AccountIdentity, ChannelId, ChannelLocation, DIRECT_MESSAGE, UNKNOWN_CHANNEL, UNKNOWN_SERVER,
};
use chatterbox_interface::ChatPlatform;
use std::time::Duration;
use tracing::{instrument, warn};

/// Slow-mode delay assumed when the channel lookup fails.
pub const SLOW_MODE_FALLBACK: Duration = Duration::from_secs(5);

/// Who the platform handle is logged in as.
#[instrument(skip(platform))]
pub async fn resolve_identity(platform: &dyn ChatPlatform) -> AccountIdentity {
    match platform.current_user().await {
        Ok(user) => AccountIdentity::from(user),
        Err(e) => {
            warn!(error = %e, "Failed to resolve account identity");
            AccountIdentity::unknown()
        }
    }
}

/// Server and channel names for `channel`.
///
/// Channels outside any guild report [`DIRECT_MESSAGE`] as their server.
#[instrument(skip(platform), fields(channel_id = %channel))]
pub async fn resolve_channel(platform: &dyn ChatPlatform, channel: &ChannelId) -> ChannelLocation {
    let info = match platform.channel(channel).await {
        Ok(info) => info,
        Err(e) => {
            warn!(error = %e, "Failed to resolve channel");
            return ChannelLocation::unknown();
        }
    };

    let channel_name = info
        .name()
        .clone()
        .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string());

    let server_name = match info.guild_id() {
        None => DIRECT_MESSAGE.to_string(),
        Some(guild) => match platform.guild(guild).await {
            Ok(guild) => guild
                .name()
                .clone()
                .unwrap_or_else(|| UNKNOWN_SERVER.to_string()),
            Err(e) => {
                warn!(error = %e, guild_id = %guild, "Failed to resolve server");
                UNKNOWN_SERVER.to_string()
            }
        },
    };

    ChannelLocation::new(server_name, channel_name)
}

/// The channel's per-user slow-mode delay, [`SLOW_MODE_FALLBACK`] if unknown.
#[instrument(skip(platform), fields(channel_id = %channel))]
pub async fn slow_mode_delay(platform: &dyn ChatPlatform, channel: &ChannelId) -> Duration {
    match platform.channel(channel).await {
        Ok(info) => Duration::from_secs(*info.rate_limit_per_user()),
        Err(e) => {
            warn!(
                error = %e,
                fallback_secs = SLOW_MODE_FALLBACK.as_secs(),
                "Failed to read slow mode delay"
            );
            SLOW_MODE_FALLBACK
        }
    }
}
