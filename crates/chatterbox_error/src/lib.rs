//! Error types for the Chatterbox library.
//!
//! This crate provides the foundation error types used throughout the Chatterbox workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use chatterbox_error::{ChatterboxResult, ConfigError, ConfigErrorKind};
//!
//! fn load() -> ChatterboxResult<String> {
//!     Err(ConfigError::new(ConfigErrorKind::NoChannels))?
//! }
//!
//! match load() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod discord;
mod error;
mod gemini;
mod rate_limit;

pub use config::{ConfigError, ConfigErrorKind};
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult};
pub use error::{ChatterboxError, ChatterboxErrorKind, ChatterboxResult};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult};
pub use rate_limit::{RateLimitError, RateLimitErrorKind};
