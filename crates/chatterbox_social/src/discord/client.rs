//! reqwest-backed [`ChatPlatform`].

use async_trait::async_trait;
use chatterbox_core::{
    ChannelId, ChannelInfo, ChannelMessage, CurrentUser, GuildId, GuildInfo, MessageId,
    OutgoingMessage,
};
use chatterbox_error::{DiscordError, DiscordErrorKind, DiscordResult};
use chatterbox_interface::ChatPlatform;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header::AUTHORIZATION};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Discord REST API root.
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v9";

#[derive(Debug, Deserialize)]
struct CreatedMessage {
    id: MessageId,
}

/// One account's handle on the Discord REST API.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for DiscordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordClient")
            .field("api_base", &self.api_base)
            .field("token_len", &self.token.len())
            .finish_non_exhaustive()
    }
}

impl DiscordClient {
    /// Create a client acting as the account owning `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: DISCORD_API_BASE.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at a different API root (proxies, tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, &self.token)
    }

    async fn execute(&self, request: RequestBuilder) -> DiscordResult<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::Http(e.to_string())))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, body = %body, "Discord API returned error");
        if status == StatusCode::UNAUTHORIZED {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken(body)));
        }
        Err(DiscordError::new(DiscordErrorKind::ApiError {
            status: status.as_u16(),
            body,
        }))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DiscordResult<T> {
        let response = self.execute(self.client.get(self.url(path))).await?;
        response
            .json()
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::Parse(e.to_string())))
    }
}

#[async_trait]
impl ChatPlatform for DiscordClient {
    #[instrument(skip(self), fields(channel_id = %channel))]
    async fn latest_message(&self, channel: &ChannelId) -> DiscordResult<Option<ChannelMessage>> {
        let messages: Vec<ChannelMessage> = self
            .get_json(&format!("/channels/{channel}/messages?limit=1"))
            .await?;
        Ok(messages.into_iter().next())
    }

    #[instrument(skip(self, message), fields(channel_id = %channel, len = message.content().len()))]
    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutgoingMessage,
    ) -> DiscordResult<MessageId> {
        let request = self
            .client
            .post(self.url(&format!("/channels/{channel}/messages")))
            .json(message);

        let response = self.execute(request).await.map_err(|e| {
            if let DiscordErrorKind::ApiError { status, body } = e.kind() {
                DiscordError::new(DiscordErrorKind::MessageSendFailed(format!(
                    "status {status}: {body}"
                )))
            } else {
                e
            }
        })?;

        let created: CreatedMessage = response
            .json()
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::Parse(e.to_string())))?;
        Ok(created.id)
    }

    #[instrument(skip(self), fields(channel_id = %channel, message_id = %message))]
    async fn delete_message(&self, channel: &ChannelId, message: &MessageId) -> DiscordResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("/channels/{channel}/messages/{message}")));
        let response = self.execute(request).await?;

        // Any 2xx other than 204 means Discord did something unexpected.
        if response.status() != StatusCode::NO_CONTENT {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DiscordError::new(DiscordErrorKind::ApiError { status, body }));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(channel_id = %channel))]
    async fn channel(&self, channel: &ChannelId) -> DiscordResult<ChannelInfo> {
        self.get_json(&format!("/channels/{channel}")).await
    }

    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn guild(&self, guild: &GuildId) -> DiscordResult<GuildInfo> {
        self.get_json(&format!("/guilds/{guild}")).await
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> DiscordResult<CurrentUser> {
        self.get_json("/users/@me").await
    }
}
