//! Test utilities for generator tests.
//!
//! `ScriptedBackend` replays a queue of canned outcomes and records every
//! key it was called with.

use async_trait::async_trait;
use chatterbox_error::{GeminiError, GeminiErrorKind, GeminiResult};
use chatterbox_interface::GenerationBackend;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Canned response for one call.
#[derive(Debug, Clone)]
pub enum Scripted {
    Text(&'static str),
    Status(u16),
    Transport,
    /// 200 with no candidate text.
    Empty,
    /// 200 with a body that does not parse.
    Garbled,
}

/// Backend whose answers depend on the key and a per-key script.
#[derive(Default)]
pub struct ScriptedBackend {
    per_key: Mutex<HashMap<String, VecDeque<Scripted>>>,
    fallback: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue outcomes for calls made with `key`.
    pub fn script_key(self, key: &str, outcomes: impl IntoIterator<Item = Scripted>) -> Self {
        self.per_key
            .lock()
            .entry(key.to_string())
            .or_default()
            .extend(outcomes);
        self
    }

    /// Queue outcomes for calls whose key has no script left.
    pub fn script(self, outcomes: impl IntoIterator<Item = Scripted>) -> Self {
        self.fallback.lock().extend(outcomes);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_content(&self, api_key: &str, _prompt: &str) -> GeminiResult<String> {
        self.calls.lock().push(api_key.to_string());

        let next = self
            .per_key
            .lock()
            .get_mut(api_key)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.fallback.lock().pop_front());

        match next {
            Some(Scripted::Text(text)) => Ok(text.to_string()),
            Some(Scripted::Status(status_code)) => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: "scripted".to_string(),
            })),
            Some(Scripted::Empty) => Err(GeminiError::new(GeminiErrorKind::EmptyResponse)),
            Some(Scripted::Garbled) => Err(GeminiError::new(GeminiErrorKind::ResponseParse(
                "expected value at line 1 column 1".to_string(),
            ))),
            Some(Scripted::Transport) | None => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "scripted transport failure".to_string(),
            ))),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
