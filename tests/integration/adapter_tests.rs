//! Adapter integration tests
//!
//! Drives the public API end-to-end against a scripted bridge implemented
//! through the public `CommandBridge` trait, the same seam a host
//! application would use to run without Discord.

use async_trait::async_trait;
use parking_lot::Mutex;
use presence_link::{
    BridgeError, CommandBridge, PresenceAdapter, PresenceOptions, PresenceStatus,
};
use std::sync::Arc;

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Bridge whose `init` fails a fixed number of times before succeeding.
struct FlakyBridge {
    init_failures_left: Mutex<u32>,
    init_calls: Mutex<u32>,
    connected: Mutex<bool>,
    updates: Mutex<Vec<PresenceOptions>>,
}

impl FlakyBridge {
    fn failing_first(n: u32) -> Arc<Self> {
        Arc::new(Self {
            init_failures_left: Mutex::new(n),
            init_calls: Mutex::new(0),
            connected: Mutex::new(false),
            updates: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CommandBridge for FlakyBridge {
    async fn init(&self) -> Result<String, BridgeError> {
        *self.init_calls.lock() += 1;
        let mut left = self.init_failures_left.lock();
        if *left > 0 {
            *left -= 1;
            Err(BridgeError::new("presence service not running"))
        } else {
            *self.connected.lock() = true;
            Ok("scripted bridge connected".to_string())
        }
    }

    async fn update(&self, options: PresenceOptions) -> Result<(), BridgeError> {
        if !*self.connected.lock() {
            return Err(BridgeError::new("not connected"));
        }
        self.updates.lock().push(options);
        Ok(())
    }

    async fn clear(&self) -> Result<(), BridgeError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BridgeError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    init_logging();

    let bridge = FlakyBridge::failing_first(0);
    let mut adapter = PresenceAdapter::new(bridge.clone());

    // Connect, push a couple of updates, clear, disconnect
    assert_eq!(adapter.initialize().await, PresenceStatus::Applied);
    assert!(adapter.is_connected());

    let status = adapter
        .update_presence(
            PresenceOptions::new()
                .details("reviewing pull request")
                .state("src/bridge/discord.rs"),
        )
        .await;
    assert_eq!(status, PresenceStatus::Applied);

    let status = adapter
        .update_presence(PresenceOptions::new().details("idle"))
        .await;
    assert_eq!(status, PresenceStatus::Applied);

    assert_eq!(adapter.clear_presence().await, PresenceStatus::Applied);
    assert_eq!(adapter.disconnect().await, PresenceStatus::Applied);
    assert!(!adapter.is_connected());

    // Already disconnected: further teardown is a no-op
    assert_eq!(adapter.disconnect().await, PresenceStatus::Skipped);

    let updates = bridge.updates.lock().clone();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].details.as_deref(), Some("reviewing pull request"));
    assert_eq!(updates[1].details.as_deref(), Some("idle"));
    assert_eq!(*bridge.init_calls.lock(), 1);
}

#[tokio::test]
async fn test_service_appears_after_startup() {
    init_logging();

    // The presence service is not running when the app starts
    let bridge = FlakyBridge::failing_first(1);
    let mut adapter = PresenceAdapter::new(bridge.clone());

    // First update retries initialization, which fails; the update itself
    // is attempted and rejected. The app keeps running either way.
    let status = adapter
        .update_presence(PresenceOptions::new().details("starting up"))
        .await;
    assert_eq!(status, PresenceStatus::Unavailable);
    assert!(!adapter.is_connected());

    // The service comes up later; the next update connects and goes through
    let status = adapter
        .update_presence(PresenceOptions::new().details("back online"))
        .await;
    assert_eq!(status, PresenceStatus::Applied);
    assert!(adapter.is_connected());
    assert_eq!(*bridge.init_calls.lock(), 2);
}

#[tokio::test]
async fn test_teardown_without_service_is_silent() {
    init_logging();

    let bridge = FlakyBridge::failing_first(u32::MAX);
    let mut adapter = PresenceAdapter::new(bridge.clone());

    assert_eq!(adapter.initialize().await, PresenceStatus::Unavailable);

    // Clear and disconnect must not touch the bridge while unconnected
    assert_eq!(adapter.clear_presence().await, PresenceStatus::Skipped);
    assert_eq!(adapter.disconnect().await, PresenceStatus::Skipped);
    assert_eq!(*bridge.init_calls.lock(), 1);
    assert!(bridge.updates.lock().is_empty());
}
