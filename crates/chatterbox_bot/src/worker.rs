//! Per-channel control loop.
//!
//! A worker runs forever in one of two modes:
//!
//! - Read mode (generation on): wait, fetch the latest message, claim it,
//!   generate a reply and post it unless it just echoes the prompt.
//! - Broadcast mode: wait, draw a line from the static pool, post it.
//!
//! Every failure is logged and the loop carries on with the next iteration.

use crate::ProcessedMessages;
use chatterbox_core::{ChannelId, ChannelSettings, MessageId, UserId};
use chatterbox_interface::ChatPlatform;
use chatterbox_models::{EMPTY_REPLY, ReplyGenerator};
use chatterbox_social::{Dispatcher, slow_mode_delay};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Wait between attempts to resolve the worker's own account.
pub const IDENTITY_RETRY: Duration = Duration::from_secs(30);

static WORD_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w").expect("valid word-character regex"));

/// Phase of a worker iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerState {
    /// Sleeping before the next read or broadcast.
    WaitingToRead,
    /// Fetching and filtering the latest message.
    Reading,
    /// Producing reply text.
    Generating,
    /// Posting the reply.
    Dispatching,
}

/// How a single iteration ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Iteration {
    /// Nothing to answer: empty channel, fetch failure, or an ignored message.
    Idle,
    /// Latest message has attachments or no word characters. It is not
    /// claimed, so it is looked at again next iteration.
    NotText,
    /// The generator declined to produce a reply.
    Skipped,
    /// The reply matched the prompt and was not sent.
    Echo,
    /// Message posted.
    Sent(MessageId),
    /// Posting failed; the message is not retried.
    SendFailed,
}

struct Prompt {
    id: MessageId,
    text: String,
}

/// One channel's read, generate, dispatch loop.
pub struct ChannelWorker {
    channel: ChannelId,
    settings: ChannelSettings,
    platform: Arc<dyn ChatPlatform>,
    dispatcher: Dispatcher,
    generator: Arc<ReplyGenerator>,
    processed: Arc<ProcessedMessages>,
    state: WorkerState,
}

impl std::fmt::Debug for ChannelWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelWorker")
            .field("channel", &self.channel)
            .field("settings", &self.settings)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ChannelWorker {
    /// Worker for `channel`, acting through `platform`.
    pub fn new(
        channel: ChannelId,
        settings: ChannelSettings,
        platform: Arc<dyn ChatPlatform>,
        generator: Arc<ReplyGenerator>,
        processed: Arc<ProcessedMessages>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&platform)),
            channel,
            settings,
            platform,
            generator,
            processed,
            state: WorkerState::WaitingToRead,
        }
    }

    /// Monitored channel.
    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }

    /// Worker settings.
    pub fn settings(&self) -> &ChannelSettings {
        &self.settings
    }

    /// Current phase.
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Run until the task is dropped.
    #[instrument(skip(self), fields(channel_id = %self.channel))]
    pub async fn run(mut self) {
        if self.settings.read_messages() {
            let own_id = self.own_user_id().await;
            loop {
                self.read_once(&own_id).await;
                let interval = *self.settings.loop_interval();
                info!(delay_secs = interval.as_secs(), "Waiting before next iteration");
                sleep(interval).await;
            }
        } else {
            loop {
                self.broadcast_once().await;
            }
        }
    }

    /// Resolve the acting account, retrying until the platform answers.
    async fn own_user_id(&self) -> UserId {
        loop {
            match self.platform.current_user().await {
                Ok(user) => return user.id().clone(),
                Err(e) => {
                    error!(
                        error = %e,
                        retry_secs = IDENTITY_RETRY.as_secs(),
                        "Failed to get account info"
                    );
                    sleep(IDENTITY_RETRY).await;
                }
            }
        }
    }

    /// One read-mode iteration, without the trailing loop interval.
    pub async fn read_once(&mut self, own_id: &UserId) -> Iteration {
        self.transition(WorkerState::WaitingToRead);
        let read_delay = *self.settings.read_delay();
        info!(delay_secs = read_delay.as_secs(), "Waiting before reading messages");
        sleep(read_delay).await;

        self.transition(WorkerState::Reading);
        let prompt = match self.select_prompt(own_id).await {
            Ok(prompt) => prompt,
            Err(iteration) => {
                if iteration == Iteration::Idle {
                    info!("No new messages or invalid message");
                }
                return iteration;
            }
        };

        if *self.settings.use_slow_mode() {
            let delay = slow_mode_delay(self.platform.as_ref(), &self.channel).await;
            info!(delay_secs = delay.as_secs(), "Slow mode active, waiting");
            sleep(delay).await;
        }

        self.transition(WorkerState::Generating);
        let generated = self
            .generator
            .generate(
                &prompt.text,
                self.settings.language().as_ref(),
                *self.settings.use_generation(),
            )
            .await;
        let Some(reply) = generated else {
            warn!(message_id = %prompt.id, "No usable reply, message skipped");
            return Iteration::Skipped;
        };

        let reply = if reply.is_empty() {
            EMPTY_REPLY.to_string()
        } else {
            reply
        };
        if reply.trim().to_lowercase() == prompt.text.trim().to_lowercase() {
            warn!(message_id = %prompt.id, "Reply same as received message, not sending");
            return Iteration::Echo;
        }

        self.transition(WorkerState::Dispatching);
        let reply_to = self.settings.reply_as_thread().then_some(&prompt.id);
        self.dispatch(&reply, reply_to).await
    }

    /// One broadcast-mode iteration: wait the loop interval, then post a pool line.
    pub async fn broadcast_once(&mut self) -> Iteration {
        self.transition(WorkerState::WaitingToRead);
        let interval = *self.settings.loop_interval();
        info!(delay_secs = interval.as_secs(), "Waiting before sending message from file");
        sleep(interval).await;

        self.transition(WorkerState::Generating);
        let text = self.generator.draw_static().await;

        self.transition(WorkerState::Dispatching);
        self.dispatch(&text, None).await
    }

    async fn select_prompt(&self, own_id: &UserId) -> Result<Prompt, Iteration> {
        let message = match self.platform.latest_message(&self.channel).await {
            Ok(Some(message)) => message,
            Ok(None) => return Err(Iteration::Idle),
            Err(e) => {
                error!(error = %e, "Request error");
                return Err(Iteration::Idle);
            }
        };

        if message.author_id() == Some(own_id)
            || message.is_system()
            || self.processed.contains(message.id())
        {
            debug!(message_id = %message.id(), "Latest message already handled or ignorable");
            return Err(Iteration::Idle);
        }

        let text = message.content().trim();
        if message.has_attachments() || !WORD_CHARACTER.is_match(text) {
            warn!(message_id = %message.id(), "Message not processed (not pure text)");
            return Err(Iteration::NotText);
        }

        // Another worker on the same channel may have claimed it meanwhile.
        if !self.processed.insert_if_new(message.id()) {
            return Err(Iteration::Idle);
        }

        info!(message_id = %message.id(), "Received: {}", text);
        Ok(Prompt {
            id: message.id().clone(),
            text: text.to_string(),
        })
    }

    async fn dispatch(&self, text: &str, reply_to: Option<&MessageId>) -> Iteration {
        match self
            .dispatcher
            .send(&self.channel, text, reply_to, self.settings.deletion())
            .await
        {
            Ok(id) => Iteration::Sent(id),
            Err(_) => Iteration::SendFailed,
        }
    }

    fn transition(&mut self, next: WorkerState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Worker state change");
            self.state = next;
        }
    }
}
