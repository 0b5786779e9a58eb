//! Core data types for the Chatterbox channel automation client.
//!
//! This crate provides the data model shared by every Chatterbox crate:
//! snowflake identifiers, accounts, per-channel settings, and the chat
//! platform's message and identity payloads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod account;
mod identity;
mod ids;
mod language;
mod message;
mod settings;

pub use account::Account;
pub use identity::{
    AccountIdentity, ChannelInfo, ChannelLocation, CurrentUser, DIRECT_MESSAGE, GuildInfo,
    UNKNOWN, UNKNOWN_CHANNEL, UNKNOWN_SERVER,
};
pub use ids::{ChannelId, GuildId, MessageId, UserId};
pub use language::Language;
pub use message::{
    Attachment, ChannelMessage, MessageAuthor, MessageReference, OutgoingMessage,
    SYSTEM_MESSAGE_TYPE,
};
pub use settings::{ChannelSettings, ChannelSettingsBuilder, DeletionPolicy};
