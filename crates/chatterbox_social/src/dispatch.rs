//! Message dispatch with scheduled deletion.

use chatterbox_core::{ChannelId, DeletionPolicy, MessageId, OutgoingMessage};
use chatterbox_error::DiscordResult;
use chatterbox_interface::ChatPlatform;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Posts messages for one account and cleans them up afterwards.
///
/// Deletions run as detached tasks, so a pending delayed deletion never
/// holds up the worker that sent the message.
#[derive(Clone)]
pub struct Dispatcher {
    platform: Arc<dyn ChatPlatform>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Dispatch through `platform`.
    pub fn new(platform: Arc<dyn ChatPlatform>) -> Self {
        Self { platform }
    }

    /// Platform handle messages go through.
    pub fn platform(&self) -> &Arc<dyn ChatPlatform> {
        &self.platform
    }

    /// Post `text` to `channel`, threaded under `reply_to` when given.
    ///
    /// Deletion is scheduled only once the send is confirmed. Failures are
    /// logged and returned; the caller decides whether to carry on.
    #[instrument(skip(self, text), fields(channel_id = %channel, len = text.len()))]
    pub async fn send(
        &self,
        channel: &ChannelId,
        text: &str,
        reply_to: Option<&MessageId>,
        deletion: DeletionPolicy,
    ) -> DiscordResult<MessageId> {
        let message = match reply_to {
            Some(target) => OutgoingMessage::reply(text, target.clone()),
            None => OutgoingMessage::new(text),
        };

        let id = self
            .platform
            .send_message(channel, &message)
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to send message"))?;

        info!(message_id = %id, threaded = reply_to.is_some(), "Message sent: {}", text);
        self.schedule_deletion(channel, &id, deletion);
        Ok(id)
    }

    /// Spawn the background deletion for a sent message, if the policy asks for one.
    pub fn schedule_deletion(
        &self,
        channel: &ChannelId,
        message: &MessageId,
        deletion: DeletionPolicy,
    ) -> Option<JoinHandle<()>> {
        let delay = match deletion {
            DeletionPolicy::Keep => return None,
            DeletionPolicy::Immediately => Duration::ZERO,
            DeletionPolicy::After(delay) => delay,
        };

        let platform = Arc::clone(&self.platform);
        let channel = channel.clone();
        let message = message.clone();
        Some(tokio::spawn(async move {
            if !delay.is_zero() {
                debug!(message_id = %message, delay_secs = delay.as_secs(), "Deletion scheduled");
                tokio::time::sleep(delay).await;
            }
            match platform.delete_message(&channel, &message).await {
                Ok(()) => info!(channel_id = %channel, message_id = %message, "Message deleted"),
                Err(e) => warn!(
                    channel_id = %channel,
                    message_id = %message,
                    error = %e,
                    "Failed to delete message"
                ),
            }
        }))
    }
}
