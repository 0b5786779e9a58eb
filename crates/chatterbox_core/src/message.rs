//! Channel message payloads.

use crate::{MessageId, UserId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Message type code the worker never answers (member join / boost notices).
pub const SYSTEM_MESSAGE_TYPE: u32 = 8;

/// Author of a channel message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MessageAuthor {
    /// Author user id
    id: UserId,
}

/// File attached to a channel message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Attachment {
    /// Attachment id
    #[serde(default)]
    id: String,
    /// Original file name
    #[serde(default)]
    filename: String,
}

impl Attachment {
    /// Build an attachment payload directly.
    pub fn new(id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
        }
    }
}

/// One entry of `GET /channels/{id}/messages`.
///
/// # Examples
///
/// ```
/// use chatterbox_core::ChannelMessage;
///
/// let msg = ChannelMessage::new("10", "42", 0, "hello there", vec![]);
/// assert!(!msg.is_system());
/// assert!(!msg.has_attachments());
/// assert_eq!(msg.author_id().map(|id| id.as_str()), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChannelMessage {
    /// Message id
    id: MessageId,
    /// Author, absent on some system messages
    #[serde(default)]
    author: Option<MessageAuthor>,
    /// Message type code
    #[serde(rename = "type", default)]
    kind: u32,
    /// Text content
    #[serde(default)]
    content: String,
    /// Attached files
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl ChannelMessage {
    /// Build a message payload directly.
    pub fn new(
        id: impl Into<MessageId>,
        author_id: impl Into<UserId>,
        kind: u32,
        content: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            id: id.into(),
            author: Some(MessageAuthor {
                id: author_id.into(),
            }),
            kind,
            content: content.into(),
            attachments,
        }
    }

    /// Author id, if the payload carried one.
    pub fn author_id(&self) -> Option<&UserId> {
        self.author.as_ref().map(|author| &author.id)
    }

    /// Whether the message is a system notice rather than user text.
    pub fn is_system(&self) -> bool {
        self.kind == SYSTEM_MESSAGE_TYPE
    }

    /// Whether any file is attached.
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// Reference that turns an outgoing message into a threaded reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MessageReference {
    /// Message being replied to
    message_id: MessageId,
}

/// Body of `POST /channels/{id}/messages`.
///
/// # Examples
///
/// ```
/// use chatterbox_core::{MessageId, OutgoingMessage};
///
/// let plain = OutgoingMessage::new("hi");
/// assert!(plain.message_reference().is_none());
///
/// let reply = OutgoingMessage::reply("hi", MessageId::new("7"));
/// assert_eq!(reply.message_reference().as_ref().map(|r| r.message_id().as_str()), Some("7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OutgoingMessage {
    /// Text content
    content: String,
    /// Reply target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message_reference: Option<MessageReference>,
}

impl OutgoingMessage {
    /// A plain message.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_reference: None,
        }
    }

    /// A message threaded as a reply to `reply_to`.
    pub fn reply(content: impl Into<String>, reply_to: MessageId) -> Self {
        Self {
            content: content.into(),
            message_reference: Some(MessageReference {
                message_id: reply_to,
            }),
        }
    }
}
