//! Snowflake identifiers.
//!
//! Discord encodes snowflakes as decimal strings in JSON, so each id wraps
//! the string form and serializes transparently.

use serde::{Deserialize, Serialize};

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        #[display("{}", _0)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw snowflake string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw snowflake string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

snowflake!(
    /// Text channel identifier.
    ChannelId
);
snowflake!(
    /// Message identifier.
    MessageId
);
snowflake!(
    /// Guild (server) identifier.
    GuildId
);
snowflake!(
    /// User identifier.
    UserId
);
