//! Discord Rich Presence bridge over the local IPC socket

use super::{BridgeError, CommandBridge};
use crate::config::PresenceConfig;
use crate::presence::PresenceOptions;
use async_trait::async_trait;
use discord_rich_presence::activity::{Activity, Assets, Timestamps};
use discord_rich_presence::{DiscordIpc, DiscordIpcClient};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Production bridge driving Discord Rich Presence.
///
/// The IPC client does blocking socket I/O, so every command runs on the
/// tokio blocking pool. The client slot is shared with those blocking tasks
/// behind a mutex.
pub struct DiscordBridge {
    client: Arc<Mutex<Option<DiscordIpcClient>>>,
    config: PresenceConfig,
    /// Unix timestamp feeding the elapsed-time clock Discord displays.
    started_at: i64,
}

impl DiscordBridge {
    /// Create a bridge for the configured Discord application.
    ///
    /// Does not connect; the first `init` command does.
    pub fn new(config: PresenceConfig) -> Self {
        let started_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        Self {
            client: Arc::new(Mutex::new(None)),
            config,
            started_at,
        }
    }
}

#[async_trait]
impl CommandBridge for DiscordBridge {
    async fn init(&self) -> Result<String, BridgeError> {
        let client = Arc::clone(&self.client);
        let app_id = self.config.application_id.clone();

        run_blocking(move || {
            let mut slot = client.lock();
            if slot.is_some() {
                return Ok("Discord IPC already connected".to_string());
            }

            let mut ipc = DiscordIpcClient::new(&app_id)
                .map_err(|e| format!("failed to create Discord IPC client: {e}"))?;
            ipc.connect().map_err(|e| {
                format!("failed to connect to Discord (is it running?): {e}")
            })?;
            *slot = Some(ipc);

            info!(%app_id, "connected to Discord IPC");
            Ok(format!("Discord IPC connected (application {app_id})"))
        })
        .await
    }

    async fn update(&self, options: PresenceOptions) -> Result<(), BridgeError> {
        let client = Arc::clone(&self.client);
        let details = options.details.unwrap_or_default();
        let state = options.state.unwrap_or_default();
        let large_image = options
            .large_image
            .unwrap_or_else(|| self.config.default_large_image.clone());
        let large_text = options
            .large_text
            .unwrap_or_else(|| self.config.default_large_text.clone());
        let started_at = self.started_at;

        run_blocking(move || {
            let mut slot = client.lock();
            let ipc = slot
                .as_mut()
                .ok_or_else(|| "Discord IPC not connected".to_string())?;

            let mut activity = Activity::new();
            if !details.is_empty() {
                activity = activity.details(&details);
            }
            if !state.is_empty() {
                activity = activity.state(&state);
            }
            activity = activity
                .assets(Assets::new().large_image(&large_image).large_text(&large_text))
                .timestamps(Timestamps::new().start(started_at));

            ipc.set_activity(activity)
                .map_err(|e| format!("failed to set activity: {e}"))?;

            debug!(%details, %state, "presence activity pushed");
            Ok(())
        })
        .await
    }

    async fn clear(&self) -> Result<(), BridgeError> {
        let client = Arc::clone(&self.client);

        run_blocking(move || {
            let mut slot = client.lock();
            let ipc = slot
                .as_mut()
                .ok_or_else(|| "Discord IPC not connected".to_string())?;

            ipc.clear_activity()
                .map_err(|e| format!("failed to clear activity: {e}"))?;
            debug!("presence activity cleared");
            Ok(())
        })
        .await
    }

    async fn disconnect(&self) -> Result<(), BridgeError> {
        let client = Arc::clone(&self.client);

        run_blocking(move || {
            let mut slot = client.lock();
            match slot.take() {
                Some(mut ipc) => {
                    ipc.close()
                        .map_err(|e| format!("failed to close Discord IPC: {e}"))?;
                    info!("Discord IPC connection closed");
                    Ok(())
                }
                // Closing an unconnected bridge is not a failure
                None => Ok(()),
            }
        })
        .await
    }
}

/// Run a blocking IPC call on the tokio blocking pool, flattening errors.
///
/// The IPC client's errors are not `Send`, so closures convert them to
/// strings before crossing the thread boundary.
async fn run_blocking<T: Send + 'static>(
    f: impl FnOnce() -> Result<T, String> + Send + 'static,
) -> Result<T, BridgeError> {
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(message)) => Err(BridgeError::new(message)),
        Err(join) => Err(BridgeError::new(format!("bridge task failed: {join}"))),
    }
}
