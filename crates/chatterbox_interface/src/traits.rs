//! Trait definitions for the chat platform and the generation backend.

use async_trait::async_trait;
use chatterbox_core::{
    ChannelId, ChannelInfo, ChannelMessage, CurrentUser, GuildId, GuildInfo, MessageId,
    OutgoingMessage,
};
use chatterbox_error::{DiscordResult, GeminiResult};

/// One authenticated account on the chat platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Most recent message in the channel, `None` for an empty channel.
    async fn latest_message(&self, channel: &ChannelId) -> DiscordResult<Option<ChannelMessage>>;

    /// Post a message and return the id the platform assigned to it.
    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutgoingMessage,
    ) -> DiscordResult<MessageId>;

    /// Delete a previously posted message.
    async fn delete_message(&self, channel: &ChannelId, message: &MessageId) -> DiscordResult<()>;

    /// Channel metadata, including its slow-mode delay.
    async fn channel(&self, channel: &ChannelId) -> DiscordResult<ChannelInfo>;

    /// Guild metadata.
    async fn guild(&self, guild: &GuildId) -> DiscordResult<GuildInfo>;

    /// The account this platform handle acts as.
    async fn current_user(&self) -> DiscordResult<CurrentUser>;
}

/// Text generation API.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text for `prompt` using `api_key`.
    ///
    /// Errors carry the HTTP status where there was one, so the caller can
    /// tell a retired key (404/429) from a transient failure.
    async fn generate_content(&self, api_key: &str, prompt: &str) -> GeminiResult<String>;

    /// Model identifier used in logs.
    fn model_name(&self) -> &str;
}
