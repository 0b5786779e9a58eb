//! Channel workers for Chatterbox.
//!
//! This crate wires the generation and chat crates into running workers:
//!
//! - [`ChatterboxConfig`] and [`load_accounts`]: startup inputs, validated up front.
//! - [`ProcessedMessages`]: the shared record of messages already answered.
//! - [`ChannelWorker`]: the per-channel read, generate, dispatch loop.
//! - [`Supervisor`]: builds the shared state and spawns one worker per channel.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod accounts;
mod config;
mod processed;
mod supervisor;
mod worker;

pub use accounts::{load_accounts, parse_accounts};
pub use config::{
    ChannelConfig, ChatterboxConfig, DiscordConfig, GenerationConfig, ProcessedConfig,
};
pub use processed::{DEFAULT_PROCESSED_CAPACITY, ProcessedMessages};
pub use supervisor::{ChannelPlan, SpawnedWorker, Supervisor};
pub use worker::{ChannelWorker, IDENTITY_RETRY, Iteration, WorkerState};
