//! Discord REST client.
//!
//! Requests authenticate with the account token placed verbatim in the
//! `Authorization` header.

mod client;

pub use client::{DISCORD_API_BASE, DiscordClient};
