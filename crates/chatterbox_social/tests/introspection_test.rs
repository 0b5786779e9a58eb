//! Tests for identity, channel, and slow-mode lookups.

mod test_utils;

use chatterbox_core::{ChannelId, ChannelInfo, CurrentUser, GuildId, GuildInfo};
use chatterbox_social::{SLOW_MODE_FALLBACK, resolve_channel, resolve_identity, slow_mode_delay};
use std::time::Duration;
use test_utils::MockPlatform;

#[tokio::test]
async fn test_resolve_identity() {
    let platform = MockPlatform::new().with_user(CurrentUser::new("42", "alice", "0001"));
    let identity = resolve_identity(&platform).await;
    assert_eq!(identity.to_string(), "alice#0001 (ID: 42)");
}

#[tokio::test]
async fn test_resolve_identity_failure_is_unknown() {
    let platform = MockPlatform::new();
    let identity = resolve_identity(&platform).await;
    assert_eq!(identity.username(), "Unknown");
    assert_eq!(identity.id(), "Unknown");
}

#[tokio::test]
async fn test_resolve_guild_channel() {
    let platform = MockPlatform::new()
        .with_channel(ChannelInfo::new(
            "111",
            Some("general".to_string()),
            Some(GuildId::new("9")),
            0,
        ))
        .with_guild(GuildInfo::new("My Server"));

    let location = resolve_channel(&platform, &ChannelId::new("111")).await;
    assert_eq!(location.to_string(), "Server: My Server | Channel: general");
}

#[tokio::test]
async fn test_channel_without_guild_is_direct_message() {
    let platform = MockPlatform::new().with_channel(ChannelInfo::new("111", None, None, 0));

    let location = resolve_channel(&platform, &ChannelId::new("111")).await;
    assert_eq!(location.server_name(), "Direct Message");
    assert_eq!(location.channel_name(), "Unknown Channel");
}

#[tokio::test]
async fn test_guild_lookup_failure_keeps_channel_name() {
    let platform = MockPlatform::new().with_channel(ChannelInfo::new(
        "111",
        Some("general".to_string()),
        Some(GuildId::new("9")),
        0,
    ));

    let location = resolve_channel(&platform, &ChannelId::new("111")).await;
    assert_eq!(location.server_name(), "Unknown Server");
    assert_eq!(location.channel_name(), "general");
}

#[tokio::test]
async fn test_channel_lookup_failure_is_unknown() {
    let platform = MockPlatform::new();
    let location = resolve_channel(&platform, &ChannelId::new("111")).await;
    assert_eq!(location.to_string(), "Server: Unknown Server | Channel: Unknown Channel");
}

#[tokio::test]
async fn test_slow_mode_delay() {
    let platform = MockPlatform::new().with_channel(ChannelInfo::new("111", None, None, 30));
    let delay = slow_mode_delay(&platform, &ChannelId::new("111")).await;
    assert_eq!(delay, Duration::from_secs(30));
}

#[tokio::test]
async fn test_slow_mode_fallback() {
    let platform = MockPlatform::new();
    let delay = slow_mode_delay(&platform, &ChannelId::new("111")).await;
    assert_eq!(delay, SLOW_MODE_FALLBACK);
    assert_eq!(delay, Duration::from_secs(5));
}
