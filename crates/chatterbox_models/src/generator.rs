//! Reply generation with key rotation and repeat suppression.

use crate::{MessagePool, build_instruction};
use chatterbox_core::Language;
use chatterbox_error::GeminiErrorKind;
use chatterbox_interface::GenerationBackend;
use chatterbox_rate_limit::KeyRotator;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Wait between attempts after a failure that does not retire the key.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(2);

/// Identical generations tolerated in a row before the message is skipped.
pub const DEFAULT_MAX_REGENERATIONS: u32 = 10;

/// Substituted when the API answers with an empty string.
pub const EMPTY_REPLY: &str = "Sorry, cannot reply to message.";

/// Produces reply text for every channel worker.
///
/// Owns the process-wide "last generated text": two successive generated
/// replies, from any channel, are never byte-for-byte identical.
pub struct ReplyGenerator {
    backend: Arc<dyn GenerationBackend>,
    rotator: Arc<KeyRotator>,
    pool: MessagePool,
    last_generated: Mutex<Option<String>>,
    retry_backoff: Duration,
    max_regenerations: Option<u32>,
}

impl std::fmt::Debug for ReplyGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyGenerator")
            .field("model", &self.backend.model_name())
            .field("rotator", &self.rotator)
            .field("pool", &self.pool)
            .field("retry_backoff", &self.retry_backoff)
            .field("max_regenerations", &self.max_regenerations)
            .finish_non_exhaustive()
    }
}

impl ReplyGenerator {
    /// Create a generator with default retry settings.
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        rotator: Arc<KeyRotator>,
        pool: MessagePool,
    ) -> Self {
        Self {
            backend,
            rotator,
            pool,
            last_generated: Mutex::new(None),
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            max_regenerations: Some(DEFAULT_MAX_REGENERATIONS),
        }
    }

    /// Set the wait between attempts after a transient failure.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Cap consecutive identical generations; `None` regenerates forever.
    pub fn with_max_regenerations(mut self, max: Option<u32>) -> Self {
        self.max_regenerations = max;
        self
    }

    /// Shared key rotator.
    pub fn rotator(&self) -> &Arc<KeyRotator> {
        &self.rotator
    }

    /// Most recent text returned by the generation API.
    pub fn last_generated(&self) -> Option<String> {
        self.last_generated.lock().clone()
    }

    /// Produce reply text for `prompt`.
    ///
    /// With `use_ai` off this draws from the static pool and ignores the
    /// other arguments. With it on, `language` must be `en` or `id`;
    /// anything else returns `None`, meaning "skip this message".
    pub async fn generate(&self, prompt: &str, language: &str, use_ai: bool) -> Option<String> {
        if !use_ai {
            return Some(self.pool.draw().await);
        }

        match language.parse::<Language>() {
            Ok(language) => self.generate_reply(prompt, language).await,
            Err(_) => {
                warn!(language, "Invalid prompt language, message skipped");
                None
            }
        }
    }

    /// Draw a line from the static pool.
    pub async fn draw_static(&self) -> String {
        self.pool.draw().await
    }

    /// Ask the generation API for a reply to `prompt` in `language`.
    ///
    /// - 404/429: the key is retired and the request repeats with a fresh
    ///   key; exhaustion blocks inside the rotator's cooldown.
    /// - No candidate text (blocked prompt): an empty reply, left to the caller.
    /// - Unparseable body: the message is skipped.
    /// - Any other failure: wait the retry backoff and repeat with the same key.
    /// - Text identical to the previous generation: repeat with the same key.
    ///
    /// Returns `None` when the regeneration cap is hit or the response
    /// cannot be parsed.
    #[instrument(skip(self, prompt), fields(model = %self.backend.model_name(), language = %language))]
    pub async fn generate_reply(&self, prompt: &str, language: Language) -> Option<String> {
        let instruction = build_instruction(prompt, language);
        let mut key = self.rotator.acquire_key().await;
        let mut repeats = 0u32;

        loop {
            match self.backend.generate_content(&key, &instruction).await {
                Ok(text) => {
                    if self.remember(&text) {
                        debug!(text_len = text.len(), "Generated reply");
                        return Some(text);
                    }

                    repeats += 1;
                    if self.max_regenerations.is_some_and(|max| repeats > max) {
                        warn!(repeats, "Generation keeps repeating, message skipped");
                        return None;
                    }
                    info!(repeats, "AI generated same text, requesting new text");
                }
                Err(e) if e.kind().requires_key_rotation() => {
                    warn!(error = %e.kind(), "API key rejected, using another API key");
                    self.rotator.mark_used(&key);
                    key = self.rotator.acquire_key().await;
                }
                Err(e) if matches!(e.kind(), GeminiErrorKind::EmptyResponse) => {
                    warn!("Gemini returned no text");
                    return Some(String::new());
                }
                Err(e) if matches!(e.kind(), GeminiErrorKind::ResponseParse(_)) => {
                    error!(error = %e.kind(), "Unreadable Gemini response, message skipped");
                    return None;
                }
                Err(e) => {
                    error!(error = %e.kind(), "Request failed, retrying");
                    tokio::time::sleep(self.retry_backoff).await;
                }
            }
        }
    }

    /// Record `text` as the latest generation unless it repeats the previous one.
    fn remember(&self, text: &str) -> bool {
        let mut last = self.last_generated.lock();
        if last.as_deref() == Some(text) {
            return false;
        }
        *last = Some(text.to_string());
        true
    }
}
