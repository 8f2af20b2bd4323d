//! Presence Link
//!
//! A best-effort Discord Rich Presence adapter for desktop companion apps.
//!
//! # Features
//! - Forwards initialize/update/clear/disconnect to the Discord IPC socket
//! - Never propagates presence failures to the host application
//! - Connection state lives in an adapter value owned by the caller, not in
//!   a process-wide global
//! - Recording mock bridge for running without Discord (`mock-bridge` feature)

pub mod bridge;
pub mod config;
pub mod presence;

pub use bridge::{BridgeError, CommandBridge, DiscordBridge};
pub use config::PresenceConfig;
pub use presence::{PresenceAdapter, PresenceOptions, PresenceStatus};
