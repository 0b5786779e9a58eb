//! Trait seams between the channel workers and the two external APIs.
//!
//! - [`ChatPlatform`] is one authenticated account on the chat platform.
//! - [`GenerationBackend`] is the text generation API, keyed per request so
//!   the caller can rotate keys.
//!
//! Production implementations live in `chatterbox_social` and
//! `chatterbox_models`; tests substitute in-memory fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ChatPlatform, GenerationBackend};
