//! Random key selection with a shared exhaustion set.

use chatterbox_error::{RateLimitError, RateLimitErrorKind};
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Wait applied once every key is exhausted.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(86_400);

#[derive(Debug, Default)]
struct RotationState {
    used: HashSet<String>,
    last: Option<String>,
}

/// Shared pool of generation API keys.
///
/// One rotator is shared by every channel worker, so a key retired by one
/// worker is skipped by all of them.
///
/// # Examples
///
/// ```
/// use chatterbox_rate_limit::KeyRotator;
/// use std::time::Duration;
///
/// let rotator = KeyRotator::new(["a", "b"], Duration::from_secs(60)).unwrap();
/// rotator.mark_used("a");
/// assert_eq!(rotator.try_acquire().as_deref(), Some("b"));
/// ```
pub struct KeyRotator {
    keys: Vec<String>,
    cooldown: Duration,
    state: Mutex<RotationState>,
}

impl std::fmt::Debug for KeyRotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.state.lock().used.len();
        f.debug_struct("KeyRotator")
            .field("keys", &self.keys.len())
            .field("used", &used)
            .field("cooldown", &self.cooldown)
            .finish()
    }
}

impl KeyRotator {
    /// Build a rotator over `keys`. Duplicate keys are collapsed.
    ///
    /// # Errors
    ///
    /// Fails when no key is supplied, since acquiring would wait forever.
    pub fn new<I, K>(keys: I, cooldown: Duration) -> Result<Self, RateLimitError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut seen = HashSet::new();
        let keys: Vec<String> = keys
            .into_iter()
            .map(Into::into)
            .filter(|key| seen.insert(key.clone()))
            .collect();

        if keys.is_empty() {
            return Err(RateLimitError::new(RateLimitErrorKind::NoApiKeys));
        }

        debug!(keys = keys.len(), cooldown_secs = cooldown.as_secs(), "Key rotator created");
        Ok(Self {
            keys,
            cooldown,
            state: Mutex::new(RotationState::default()),
        })
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; construction rejects an empty key set.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Cooldown applied on exhaustion.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Draw a key, waiting out the cooldown whenever every key is used.
    ///
    /// There is no retry limit: if every key stays invalid this keeps
    /// cycling through cooldowns for as long as the process runs.
    #[instrument(skip(self), fields(keys = self.keys.len()))]
    pub async fn acquire_key(&self) -> String {
        loop {
            if let Some(key) = self.try_acquire() {
                return key;
            }

            error!(
                cooldown_secs = self.cooldown.as_secs(),
                "All API keys are rate limited, waiting before retry"
            );
            tokio::time::sleep(self.cooldown).await;
            self.reset();
            info!("Cooldown elapsed, API keys restored");
        }
    }

    /// Draw a key without waiting.
    ///
    /// Picks uniformly among keys not marked used, avoiding the key handed
    /// out last whenever another one is available. Returns `None` when every
    /// key is marked used.
    pub fn try_acquire(&self) -> Option<String> {
        let mut state = self.state.lock();

        let available: Vec<&String> = self
            .keys
            .iter()
            .filter(|key| !state.used.contains(*key))
            .collect();

        let fresh: Vec<&String> = available
            .iter()
            .copied()
            .filter(|key| state.last.as_ref() != Some(*key))
            .collect();

        let pool = if fresh.is_empty() { &available } else { &fresh };
        let key = pool.choose(&mut rand::thread_rng())?.to_string();

        state.last = Some(key.clone());
        Some(key)
    }

    /// Park a key until the next reset.
    #[instrument(skip_all)]
    pub fn mark_used(&self, key: &str) {
        let mut state = self.state.lock();
        if state.used.insert(key.to_string()) {
            warn!(
                used = state.used.len(),
                total = self.keys.len(),
                "API key retired until cooldown"
            );
        }
    }

    /// Whether a key is currently parked.
    pub fn is_used(&self, key: &str) -> bool {
        self.state.lock().used.contains(key)
    }

    /// Snapshot of parked keys.
    pub fn used_keys(&self) -> HashSet<String> {
        self.state.lock().used.clone()
    }

    /// Number of keys not currently parked.
    pub fn available(&self) -> usize {
        let state = self.state.lock();
        self.keys
            .iter()
            .filter(|key| !state.used.contains(*key))
            .count()
    }

    /// Clear every parked key.
    pub fn reset(&self) {
        self.state.lock().used.clear();
    }
}
