//! Test utilities for worker and supervisor tests.
//!
//! `MockPlatform` serves a settable "latest message" and records sends and
//! deletes with the tokio clock reading. `ReplyBackend` answers every
//! generation request from a queue, repeating the last entry.

use async_trait::async_trait;
use chatterbox_core::{
    ChannelId, ChannelInfo, ChannelMessage, CurrentUser, GuildId, GuildInfo, MessageId,
    OutgoingMessage,
};
use chatterbox_error::{DiscordError, DiscordErrorKind, DiscordResult, GeminiResult};
use chatterbox_interface::{ChatPlatform, GenerationBackend};
use chatterbox_models::{MessagePool, ReplyGenerator};
use chatterbox_rate_limit::KeyRotator;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

pub const OWN_USER_ID: &str = "1";

#[derive(Debug, Clone)]
pub struct Sent {
    pub channel: ChannelId,
    pub message: OutgoingMessage,
    pub at: Instant,
}

pub struct MockPlatform {
    latest: Mutex<Option<ChannelMessage>>,
    fetch_fails: Mutex<bool>,
    slow_mode_secs: Mutex<Option<u64>>,
    next_id: AtomicU64,
    fetches: AtomicUsize,
    sent: Mutex<Vec<Sent>>,
    deleted: Mutex<Vec<(MessageId, Instant)>>,
}

#[allow(dead_code)]
impl MockPlatform {
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(None),
            fetch_fails: Mutex::new(false),
            slow_mode_secs: Mutex::new(None),
            next_id: AtomicU64::new(5000),
            fetches: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn set_latest(&self, message: ChannelMessage) {
        *self.latest.lock() = Some(message);
    }

    pub fn set_fetch_fails(&self, fails: bool) {
        *self.fetch_fails.lock() = fails;
    }

    pub fn set_slow_mode(&self, secs: u64) {
        *self.slow_mode_secs.lock() = Some(secs);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().clone()
    }

    pub fn deleted(&self) -> Vec<(MessageId, Instant)> {
        self.deleted.lock().clone()
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn latest_message(&self, _channel: &ChannelId) -> DiscordResult<Option<ChannelMessage>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if *self.fetch_fails.lock() {
            return Err(DiscordError::new(DiscordErrorKind::Http(
                "connection reset".to_string(),
            )));
        }
        Ok(self.latest.lock().clone())
    }

    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutgoingMessage,
    ) -> DiscordResult<MessageId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().push(Sent {
            channel: channel.clone(),
            message: message.clone(),
            at: Instant::now(),
        });
        Ok(MessageId::new(id.to_string()))
    }

    async fn delete_message(&self, _channel: &ChannelId, message: &MessageId) -> DiscordResult<()> {
        self.deleted.lock().push((message.clone(), Instant::now()));
        Ok(())
    }

    async fn channel(&self, channel: &ChannelId) -> DiscordResult<ChannelInfo> {
        match *self.slow_mode_secs.lock() {
            Some(secs) => Ok(ChannelInfo::new(
                channel.clone(),
                Some("general".to_string()),
                Some(GuildId::new("9")),
                secs,
            )),
            None => Err(DiscordError::new(DiscordErrorKind::ApiError {
                status: 403,
                body: "Missing Access".to_string(),
            })),
        }
    }

    async fn guild(&self, _guild: &GuildId) -> DiscordResult<GuildInfo> {
        Ok(GuildInfo::new("Test Server"))
    }

    async fn current_user(&self) -> DiscordResult<CurrentUser> {
        Ok(CurrentUser::new(OWN_USER_ID, "worker", "0"))
    }
}

/// Generation backend replaying canned replies.
pub struct ReplyBackend {
    replies: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ReplyBackend {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for ReplyBackend {
    async fn generate_content(&self, _api_key: &str, _prompt: &str) -> GeminiResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut replies = self.replies.lock();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };
        Ok(reply.unwrap_or_default())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[allow(dead_code)]
pub fn generator(backend: Arc<ReplyBackend>, pool: &Path) -> Arc<ReplyGenerator> {
    let rotator = Arc::new(
        KeyRotator::new(["key-a", "key-b"], Duration::from_secs(60)).expect("keys supplied"),
    );
    Arc::new(ReplyGenerator::new(backend, rotator, MessagePool::new(pool)))
}

#[allow(dead_code)]
pub fn text_message(id: &str, author: &str, content: &str) -> ChannelMessage {
    ChannelMessage::new(id, author, 0, content, vec![])
}
