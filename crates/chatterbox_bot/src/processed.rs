//! Shared record of answered messages.

use chatterbox_core::MessageId;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

/// Capacity used when the configuration does not set one.
pub const DEFAULT_PROCESSED_CAPACITY: usize = 100_000;

/// Message ids already selected as prompts, shared by every worker.
///
/// Check-and-insert is a single locked step, so two workers watching the
/// same channel can never both claim a message. The record is bounded:
/// once full, the least recently claimed id is forgotten.
#[derive(Debug)]
pub struct ProcessedMessages {
    ids: Mutex<LruCache<MessageId, ()>>,
}

impl ProcessedMessages {
    /// Record holding at most `capacity` ids (minimum one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::MIN.saturating_add(capacity.saturating_sub(1));
        Self {
            ids: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Claim `id`. Returns `false` if it was already claimed.
    pub fn insert_if_new(&self, id: &MessageId) -> bool {
        let mut ids = self.ids.lock();
        if ids.contains(id) {
            return false;
        }
        ids.put(id.clone(), ());
        true
    }

    /// Whether `id` has been claimed.
    pub fn contains(&self, id: &MessageId) -> bool {
        self.ids.lock().contains(id)
    }

    /// Number of ids currently remembered.
    pub fn len(&self) -> usize {
        self.ids.lock().len()
    }

    /// Whether nothing has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.ids.lock().is_empty()
    }
}

impl Default for ProcessedMessages {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSED_CAPACITY)
    }
}
