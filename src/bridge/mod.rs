//! Bridge module - command boundary to the native presence service

mod discord;
#[cfg(any(test, feature = "mock-bridge"))]
mod mock;

pub use discord::DiscordBridge;
#[cfg(any(test, feature = "mock-bridge"))]
pub use mock::{BridgeCall, MockBridge};

use crate::presence::PresenceOptions;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the presence service.
///
/// There is deliberately no error taxonomy here: the adapter treats every
/// failure uniformly as "service unavailable, continue".
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct BridgeError(String);

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}


/// Commands understood by the native presence service.
///
/// Implementations report failure asynchronously; callers decide what a
/// failure means. [`DiscordBridge`] is the production implementation.
#[async_trait]
pub trait CommandBridge: Send + Sync {
    /// Connect to the presence service. Returns a status message.
    async fn init(&self) -> Result<String, BridgeError>;

    /// Push a presence update. Unset fields fall back to configured defaults.
    async fn update(&self, options: PresenceOptions) -> Result<(), BridgeError>;

    /// Clear the currently displayed presence.
    async fn clear(&self) -> Result<(), BridgeError>;

    /// Close the connection to the presence service.
    async fn disconnect(&self) -> Result<(), BridgeError>;
}
