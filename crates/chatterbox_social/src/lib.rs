//! Discord integration for Chatterbox.
//!
//! - [`DiscordClient`]: one account's handle on the Discord REST API,
//!   implementing [`chatterbox_interface::ChatPlatform`].
//! - [`resolve_identity`], [`resolve_channel`], [`slow_mode_delay`]:
//!   read-only lookups that degrade to placeholders instead of failing.
//! - [`Dispatcher`]: posts messages, optionally threaded, and schedules
//!   their deletion in the background.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod discord;
mod dispatch;
mod introspection;

pub use discord::{DISCORD_API_BASE, DiscordClient};
pub use dispatch::Dispatcher;
pub use introspection::{SLOW_MODE_FALLBACK, resolve_channel, resolve_identity, slow_mode_delay};
