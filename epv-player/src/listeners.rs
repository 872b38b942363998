//! Identity-keyed listener registry
//!
//! Listeners are compared by allocation address, not by value, so the same
//! `Arc` can never be registered twice while two distinct listeners of the same
//! type can.

use std::sync::Arc;

/// Whether two handles point at the same listener allocation
pub fn same_listener<L: ?Sized>(a: &Arc<L>, b: &Arc<L>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Set of listeners without duplicates
pub struct ListenerSet<L: ?Sized> {
    listeners: Vec<Arc<L>>,
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Returns false if the listener was already registered
    pub fn add(&mut self, listener: Arc<L>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Returns false if the listener was not registered
    pub fn remove(&mut self, listener: &Arc<L>) -> bool {
        match self
            .listeners
            .iter()
            .position(|l| same_listener(l, listener))
        {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, listener: &Arc<L>) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Copy of the current members.
    ///
    /// Dispatch iterates a snapshot so a listener may (un)register others, or
    /// itself, while being notified.
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.listeners.clone()
    }
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> std::fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}
