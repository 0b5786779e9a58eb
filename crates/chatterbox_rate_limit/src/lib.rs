//! Generation API key rotation.
//!
//! Every account contributes one generation API key. Keys that come back
//! rate limited or invalid are parked in a shared "used" set; callers draw
//! at random from what is left. When nothing is left the caller waits out a
//! long cooldown, the set is cleared, and drawing starts over.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod rotator;

pub use rotator::{DEFAULT_COOLDOWN, KeyRotator};
