//! Reply generation for Chatterbox.
//!
//! - [`GeminiClient`] talks to the Gemini `generateContent` REST endpoint
//!   with a caller-supplied key.
//! - [`MessagePool`] draws a random line from a static message file.
//! - [`ReplyGenerator`] ties them together with key rotation, retry, and
//!   suppression of back-to-back identical generations.
//!
//! # Example
//!
//! ```no_run
//! use chatterbox_models::{GeminiClient, MessagePool, ReplyGenerator};
//! use chatterbox_rate_limit::{DEFAULT_COOLDOWN, KeyRotator};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rotator = Arc::new(KeyRotator::new(["key-1", "key-2"], DEFAULT_COOLDOWN)?);
//! let generator = ReplyGenerator::new(
//!     Arc::new(GeminiClient::new("gemini-2.5-flash")),
//!     rotator,
//!     MessagePool::new("message.txt"),
//! );
//!
//! if let Some(reply) = generator.generate("gm everyone", "en", true).await {
//!     println!("{reply}");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod generator;
mod pool;
mod prompt;

pub use gemini::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiClient};
pub use generator::{DEFAULT_MAX_REGENERATIONS, DEFAULT_RETRY_BACKOFF, EMPTY_REPLY, ReplyGenerator};
pub use pool::{EMPTY_POOL, MISSING_POOL, MessagePool};
pub use prompt::build_instruction;
