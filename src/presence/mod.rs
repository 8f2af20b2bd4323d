//! Presence adapter - best-effort forwarding of presence operations
//!
//! The adapter owns the only piece of state in this crate: whether the
//! bridge has been initialized. Every operation swallows bridge failures;
//! the absence of the presence service must never disrupt the host
//! application.

use crate::bridge::{CommandBridge, DiscordBridge};
use crate::config::PresenceConfig;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Transient presence payload.
///
/// All fields are optional; unset fields fall back to the bridge's
/// configured defaults. Options are not persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceOptions {
    /// First line shown under the application name
    pub details: Option<String>,
    /// Second line shown under the details
    pub state: Option<String>,
    /// Asset key for the large image
    pub large_image: Option<String>,
    /// Hover text for the large image
    pub large_text: Option<String>,
}

impl PresenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn large_image(mut self, key: impl Into<String>) -> Self {
        self.large_image = Some(key.into());
        self
    }

    pub fn large_text(mut self, text: impl Into<String>) -> Self {
        self.large_text = Some(text.into());
        self
    }
}

/// Outcome of a presence operation.
///
/// Operations never return an error: a failure is logged and reported as
/// [`PresenceStatus::Unavailable`] so callers can observe it without being
/// obliged to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    /// The bridge call was issued and succeeded.
    Applied,
    /// No bridge call was needed in the current state.
    Skipped,
    /// The bridge call failed; adapter state is unchanged.
    Unavailable,
}

impl PresenceStatus {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Best-effort presence control for a desktop application.
///
/// Owned by the application's composition root and passed by reference to
/// whichever component drives presence; there is no global state.
pub struct PresenceAdapter {
    bridge: Arc<dyn CommandBridge>,
    initialized: bool,
}

impl PresenceAdapter {
    /// Create an adapter over an arbitrary bridge.
    pub fn new(bridge: Arc<dyn CommandBridge>) -> Self {
        Self {
            bridge,
            initialized: false,
        }
    }

    /// Create an adapter over the Discord IPC bridge.
    pub fn discord(config: PresenceConfig) -> Self {
        Self::new(Arc::new(DiscordBridge::new(config)))
    }

    /// Connect to the presence service. Idempotent once successful.
    pub async fn initialize(&mut self) -> PresenceStatus {
        if self.initialized {
            debug!("presence already initialized");
            return PresenceStatus::Skipped;
        }

        match self.bridge.init().await {
            Ok(status) => {
                info!("{status}");
                self.initialized = true;
                PresenceStatus::Applied
            }
            Err(e) => {
                warn!("presence service unavailable: {e}");
                PresenceStatus::Unavailable
            }
        }
    }

    /// Push a presence update, initializing first if needed.
    ///
    /// The update command is issued even when the implicit initialize
    /// failed; the bridge reports the failure and the caller sees
    /// [`PresenceStatus::Unavailable`].
    pub async fn update_presence(&mut self, options: PresenceOptions) -> PresenceStatus {
        if !self.initialized {
            let _ = self.initialize().await;
        }

        match self.bridge.update(options).await {
            Ok(()) => PresenceStatus::Applied,
            Err(e) => {
                warn!("failed to update presence: {e}");
                PresenceStatus::Unavailable
            }
        }
    }

    /// Clear the displayed presence. No-op when not initialized.
    pub async fn clear_presence(&self) -> PresenceStatus {
        if !self.initialized {
            return PresenceStatus::Skipped;
        }

        match self.bridge.clear().await {
            Ok(()) => PresenceStatus::Applied,
            Err(e) => {
                warn!("failed to clear presence: {e}");
                PresenceStatus::Unavailable
            }
        }
    }

    /// Close the connection to the presence service. No-op when not
    /// initialized.
    pub async fn disconnect(&mut self) -> PresenceStatus {
        if !self.initialized {
            return PresenceStatus::Skipped;
        }

        match self.bridge.disconnect().await {
            Ok(()) => {
                self.initialized = false;
                info!("presence service disconnected");
                PresenceStatus::Applied
            }
            Err(e) => {
                warn!("failed to disconnect presence service: {e}");
                PresenceStatus::Unavailable
            }
        }
    }

    /// Whether the presence service has been successfully initialized.
    pub fn is_connected(&self) -> bool {
        self.initialized
    }
}
