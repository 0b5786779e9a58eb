//! Per-channel worker settings.

use crate::Language;
use derive_getters::Getters;
use std::time::Duration;

/// What happens to a message after it has been posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeletionPolicy {
    /// Leave the message in place.
    #[default]
    Keep,
    /// Delete as soon as the send is confirmed.
    Immediately,
    /// Delete once the delay has elapsed after the send is confirmed.
    After(Duration),
}

impl DeletionPolicy {
    /// Combine the two configuration knobs.
    ///
    /// `delete_immediately` wins; otherwise a positive `delete_after`
    /// schedules a delayed deletion and zero or absent keeps the message.
    ///
    /// ```
    /// use chatterbox_core::DeletionPolicy;
    /// use std::time::Duration;
    ///
    /// assert_eq!(DeletionPolicy::from_parts(Some(Duration::from_secs(9)), true), DeletionPolicy::Immediately);
    /// assert_eq!(DeletionPolicy::from_parts(Some(Duration::ZERO), false), DeletionPolicy::Keep);
    /// assert_eq!(DeletionPolicy::from_parts(None, false), DeletionPolicy::Keep);
    /// ```
    pub fn from_parts(delete_after: Option<Duration>, delete_immediately: bool) -> Self {
        if delete_immediately {
            return DeletionPolicy::Immediately;
        }
        match delete_after {
            Some(delay) if !delay.is_zero() => DeletionPolicy::After(delay),
            _ => DeletionPolicy::Keep,
        }
    }
}

impl std::fmt::Display for DeletionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletionPolicy::Keep => write!(f, "No"),
            DeletionPolicy::Immediately => write!(f, "Immediately"),
            DeletionPolicy::After(delay) => write!(f, "In {} seconds", delay.as_secs()),
        }
    }
}

/// Behaviour of one channel worker. Immutable once the worker starts.
///
/// Read mode (answering the latest message) is on exactly when
/// `use_generation` is; otherwise the worker broadcasts from the static pool.
///
/// # Examples
///
/// ```
/// use chatterbox_core::{ChannelSettingsBuilder, DeletionPolicy, Language};
/// use std::time::Duration;
///
/// let settings = ChannelSettingsBuilder::default()
///     .use_generation(true)
///     .language(Language::English)
///     .loop_interval(Duration::from_secs(30))
///     .reply_as_thread(true)
///     .build()
///     .unwrap();
///
/// assert!(settings.read_messages());
/// assert_eq!(settings.deletion(), DeletionPolicy::Keep);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChannelSettings {
    /// Generate replies through the text generation API
    #[builder(default)]
    use_generation: bool,
    /// Reply language
    #[builder(default = "Language::English")]
    language: Language,
    /// Wait before each read
    #[builder(default)]
    read_delay: Duration,
    /// Wait at the end of each iteration
    loop_interval: Duration,
    /// Honour the channel's slow-mode delay before answering
    #[builder(default)]
    use_slow_mode: bool,
    /// Thread replies to the message being answered
    #[builder(default)]
    reply_as_thread: bool,
    /// Delete posted messages after this delay
    #[builder(default)]
    delete_after: Option<Duration>,
    /// Delete posted messages straight away
    #[builder(default)]
    delete_immediately: bool,
}

impl ChannelSettings {
    /// Whether the worker reads and answers the latest message.
    pub fn read_messages(&self) -> bool {
        self.use_generation
    }

    /// Deletion behaviour for posted messages.
    pub fn deletion(&self) -> DeletionPolicy {
        DeletionPolicy::from_parts(self.delete_after, self.delete_immediately)
    }
}

impl std::fmt::Display for ChannelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flag = |on: bool| if on { "Active" } else { "No" };
        write!(
            f,
            "Gemini AI = {}, Language = {}, Read Message = {}, Read Delay = {} seconds, \
             Interval = {} seconds, Slow Mode = {}, Reply = {}, Delete Message = {}",
            flag(self.use_generation),
            self.language.as_ref().to_uppercase(),
            flag(self.read_messages()),
            self.read_delay.as_secs(),
            self.loop_interval.as_secs(),
            flag(self.use_slow_mode),
            if self.reply_as_thread { "Yes" } else { "No" },
            self.deletion(),
        )
    }
}
