//! Google Gemini REST client.
//!
//! Only the `generateContent` endpoint is used. The key is passed per call
//! rather than fixed at construction so that one client serves every key in
//! the rotation.

mod client;
mod dto;

pub use client::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiClient};
