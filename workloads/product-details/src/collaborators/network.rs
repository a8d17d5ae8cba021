//! Connectivity detection.

use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether the client is online.
pub trait NetworkStatus: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Connectivity flag set by the host.
#[derive(Debug)]
pub struct StaticNetworkStatus {
    online: AtomicBool,
}

impl StaticNetworkStatus {
    pub fn online() -> Self {
        Self {
            online: AtomicBool::new(true),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: AtomicBool::new(false),
        }
    }

    /// Flip the flag, e.g. from a connectivity event.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl Default for StaticNetworkStatus {
    fn default() -> Self {
        Self::online()
    }
}

impl NetworkStatus for StaticNetworkStatus {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}
