//! Network availability contract
//!
//! A watcher delivers `NetworkSignal`s to every registered observer channel.
//! Unregistering a handle that is not (or no longer) registered is an expected
//! outcome, reported as [`Unregistration::NotRegistered`] rather than an error.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Connectivity change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkSignal {
    Available,
    Unavailable,
}

/// Registration key issued by a watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(Uuid);

impl SubscriptionHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of unregistering an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unregistration {
    Unregistered,
    NotRegistered,
}

/// Source of connectivity signals
pub trait NetworkWatcher: Send {
    /// Current connectivity
    fn is_online(&self) -> bool;

    /// Start delivering signals to `observer`
    fn register(&mut self, observer: mpsc::UnboundedSender<NetworkSignal>) -> SubscriptionHandle;

    fn unregister(&mut self, handle: SubscriptionHandle) -> Unregistration;
}
