//! Scriptable network watcher

use crate::network::{NetworkSignal, NetworkWatcher, SubscriptionHandle, Unregistration};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Default)]
struct NetworkInner {
    online: bool,
    observers: HashMap<SubscriptionHandle, mpsc::UnboundedSender<NetworkSignal>>,
    registrations: usize,
}

/// Network watcher whose connectivity is flipped by the test
#[derive(Clone)]
pub struct SimulatedNetwork {
    inner: Arc<Mutex<NetworkInner>>,
}

impl SimulatedNetwork {
    pub fn new(online: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NetworkInner {
                online,
                ..Default::default()
            })),
        }
    }

    /// Change connectivity and notify observers if it actually changed.
    ///
    /// Returns the number of observers notified.
    pub fn set_online(&self, online: bool) -> usize {
        let mut inner = self.inner.lock();
        if inner.online == online {
            return 0;
        }
        inner.online = online;

        let signal = if online {
            NetworkSignal::Available
        } else {
            NetworkSignal::Unavailable
        };
        // Observers whose receiver is gone are dropped
        inner.observers.retain(|_, tx| tx.send(signal).is_ok());
        debug!("Simulated network {:?}, {} observers", signal, inner.observers.len());
        inner.observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.lock().observers.len()
    }

    /// Total `register` calls, including ones since unregistered
    pub fn registrations(&self) -> usize {
        self.inner.lock().registrations
    }
}

impl NetworkWatcher for SimulatedNetwork {
    fn is_online(&self) -> bool {
        self.inner.lock().online
    }

    fn register(&mut self, observer: mpsc::UnboundedSender<NetworkSignal>) -> SubscriptionHandle {
        let handle = SubscriptionHandle::new();
        let mut inner = self.inner.lock();
        inner.observers.insert(handle, observer);
        inner.registrations += 1;
        handle
    }

    fn unregister(&mut self, handle: SubscriptionHandle) -> Unregistration {
        match self.inner.lock().observers.remove(&handle) {
            Some(_) => Unregistration::Unregistered,
            None => Unregistration::NotRegistered,
        }
    }
}

impl std::fmt::Debug for SimulatedNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SimulatedNetwork")
            .field("online", &inner.online)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_only_on_change() {
        let mut network = SimulatedNetwork::new(false);
        let (tx, mut rx) = mpsc::unbounded_channel();
        network.register(tx);

        assert_eq!(network.set_online(false), 0);
        assert_eq!(network.set_online(true), 1);
        assert_eq!(rx.try_recv().unwrap(), NetworkSignal::Available);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unknown_handle_is_not_registered() {
        let mut network = SimulatedNetwork::new(true);
        let (tx, _rx) = mpsc::unbounded_channel();
        let handle = network.register(tx);

        assert_eq!(network.unregister(handle), Unregistration::Unregistered);
        assert_eq!(network.unregister(handle), Unregistration::NotRegistered);
        assert_eq!(
            network.unregister(SubscriptionHandle::new()),
            Unregistration::NotRegistered
        );
    }
}
