//! Test utilities for dispatch and introspection tests.
//!
//! `MockPlatform` records every send and delete together with the tokio
//! clock reading, so paused-time tests can assert on timing.

use async_trait::async_trait;
use chatterbox_core::{
    ChannelId, ChannelInfo, ChannelMessage, CurrentUser, GuildId, GuildInfo, MessageId,
    OutgoingMessage,
};
use chatterbox_error::{DiscordError, DiscordErrorKind, DiscordResult};
use chatterbox_interface::ChatPlatform;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time::Instant;

fn unavailable() -> DiscordError {
    DiscordError::new(DiscordErrorKind::ApiError {
        status: 500,
        body: "unavailable".to_string(),
    })
}

#[derive(Default)]
pub struct MockPlatform {
    channel: Mutex<Option<ChannelInfo>>,
    guild: Mutex<Option<GuildInfo>>,
    user: Mutex<Option<CurrentUser>>,
    fail_sends: Mutex<bool>,
    next_id: AtomicU64,
    sent: Mutex<Vec<(ChannelId, OutgoingMessage, Instant)>>,
    deleted: Mutex<Vec<(ChannelId, MessageId, Instant)>>,
}

#[allow(dead_code)]
impl MockPlatform {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1000),
            ..Self::default()
        }
    }

    pub fn with_channel(self, info: ChannelInfo) -> Self {
        *self.channel.lock() = Some(info);
        self
    }

    pub fn with_guild(self, info: GuildInfo) -> Self {
        *self.guild.lock() = Some(info);
        self
    }

    pub fn with_user(self, user: CurrentUser) -> Self {
        *self.user.lock() = Some(user);
        self
    }

    pub fn failing_sends(self) -> Self {
        *self.fail_sends.lock() = true;
        self
    }

    pub fn sent(&self) -> Vec<(ChannelId, OutgoingMessage, Instant)> {
        self.sent.lock().clone()
    }

    pub fn deleted(&self) -> Vec<(ChannelId, MessageId, Instant)> {
        self.deleted.lock().clone()
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn latest_message(&self, _channel: &ChannelId) -> DiscordResult<Option<ChannelMessage>> {
        Ok(None)
    }

    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutgoingMessage,
    ) -> DiscordResult<MessageId> {
        if *self.fail_sends.lock() {
            return Err(DiscordError::new(DiscordErrorKind::MessageSendFailed(
                "status 403: missing access".to_string(),
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .push((channel.clone(), message.clone(), Instant::now()));
        Ok(MessageId::new(id.to_string()))
    }

    async fn delete_message(&self, channel: &ChannelId, message: &MessageId) -> DiscordResult<()> {
        self.deleted
            .lock()
            .push((channel.clone(), message.clone(), Instant::now()));
        Ok(())
    }

    async fn channel(&self, _channel: &ChannelId) -> DiscordResult<ChannelInfo> {
        self.channel.lock().clone().ok_or_else(unavailable)
    }

    async fn guild(&self, _guild: &GuildId) -> DiscordResult<GuildInfo> {
        self.guild.lock().clone().ok_or_else(unavailable)
    }

    async fn current_user(&self) -> DiscordResult<CurrentUser> {
        self.user.lock().clone().ok_or_else(unavailable)
    }
}
