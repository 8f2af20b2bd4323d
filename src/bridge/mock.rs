//! Recording mock bridge for running and testing without Discord

use super::{BridgeError, CommandBridge};
use crate::presence::PresenceOptions;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A single recorded bridge invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    Init,
    Update(PresenceOptions),
    Clear,
    Disconnect,
}

/// Bridge stand-in that records every call and fails on demand.
#[derive(Debug, Default)]
pub struct MockBridge {
    calls: Mutex<Vec<BridgeCall>>,
    fail_init: AtomicBool,
    fail_update: AtomicBool,
    fail_clear: AtomicBool,
    fail_disconnect: AtomicBool,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `init` commands fail.
    pub fn fail_init(&self, fail: bool) {
        self.fail_init.store(fail, Ordering::Relaxed);
    }

    /// Make subsequent `update` commands fail.
    pub fn fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::Relaxed);
    }

    /// Make subsequent `clear` commands fail.
    pub fn fail_clear(&self, fail: bool) {
        self.fail_clear.store(fail, Ordering::Relaxed);
    }

    /// Make subsequent `disconnect` commands fail.
    pub fn fail_disconnect(&self, fail: bool) {
        self.fail_disconnect.store(fail, Ordering::Relaxed);
    }

    /// Snapshot of all recorded calls, in order.
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().clone()
    }

    /// Number of recorded calls matching `call`.
    pub fn count(&self, call: &BridgeCall) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: BridgeCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl CommandBridge for MockBridge {
    async fn init(&self) -> Result<String, BridgeError> {
        self.record(BridgeCall::Init);
        if self.fail_init.load(Ordering::Relaxed) {
            Err(BridgeError::new("mock bridge: init failure"))
        } else {
            Ok("mock bridge connected".to_string())
        }
    }

    async fn update(&self, options: PresenceOptions) -> Result<(), BridgeError> {
        self.record(BridgeCall::Update(options));
        if self.fail_update.load(Ordering::Relaxed) {
            Err(BridgeError::new("mock bridge: update failure"))
        } else {
            Ok(())
        }
    }

    async fn clear(&self) -> Result<(), BridgeError> {
        self.record(BridgeCall::Clear);
        if self.fail_clear.load(Ordering::Relaxed) {
            Err(BridgeError::new("mock bridge: clear failure"))
        } else {
            Ok(())
        }
    }

    async fn disconnect(&self) -> Result<(), BridgeError> {
        self.record(BridgeCall::Disconnect);
        if self.fail_disconnect.load(Ordering::Relaxed) {
            Err(BridgeError::new("mock bridge: disconnect failure"))
        } else {
            Ok(())
        }
    }
}
