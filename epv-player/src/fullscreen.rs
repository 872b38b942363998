//! Fullscreen coordination
//!
//! Fullscreen is a state owned here plus a set of listeners that react to it
//! (the control surface swaps its icon, the host hides system bars, ...).
//! Listeners are told only about real transitions: entering while already
//! fullscreen changes nothing and notifies nobody.

use crate::layout::{HostView, LayoutParams};
use crate::listeners::ListenerSet;
use std::sync::Arc;
use tracing::debug;

/// Notified on fullscreen transitions
pub trait FullscreenListener: Send + Sync {
    fn on_enter_fullscreen(&self);
    fn on_exit_fullscreen(&self);
}

#[derive(Debug, Default)]
pub struct FullscreenCoordinator {
    is_fullscreen: bool,
    listeners: ListenerSet<dyn FullscreenListener>,
}

impl FullscreenCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Restyle `view` to fill its parent. Returns true if this was a transition.
    pub fn enter<V: HostView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.is_fullscreen {
            return false;
        }
        self.is_fullscreen = true;
        view.set_layout_params(LayoutParams::fullscreen());
        debug!("Entered fullscreen");

        for listener in self.listeners.snapshot() {
            listener.on_enter_fullscreen();
        }
        true
    }

    /// Restore the embedded layout. Returns true if this was a transition.
    pub fn exit<V: HostView + ?Sized>(&mut self, view: &mut V) -> bool {
        if !self.is_fullscreen {
            return false;
        }
        self.is_fullscreen = false;
        view.set_layout_params(LayoutParams::embedded());
        debug!("Exited fullscreen");

        for listener in self.listeners.snapshot() {
            listener.on_exit_fullscreen();
        }
        true
    }

    pub fn toggle<V: HostView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.is_fullscreen {
            self.exit(view)
        } else {
            self.enter(view)
        }
    }

    /// Returns false if the listener was already registered
    pub fn add_listener(&mut self, listener: Arc<dyn FullscreenListener>) -> bool {
        self.listeners.add(listener)
    }

    /// Returns false if the listener was not registered
    pub fn remove_listener(&mut self, listener: &Arc<dyn FullscreenListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Dimension;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct View {
        params: LayoutParams,
    }

    impl HostView for View {
        fn layout_params(&self) -> LayoutParams {
            self.params
        }

        fn set_layout_params(&mut self, params: LayoutParams) {
            self.params = params;
        }
    }

    #[derive(Default)]
    struct Transitions {
        entered: AtomicUsize,
        exited: AtomicUsize,
    }

    impl FullscreenListener for Transitions {
        fn on_enter_fullscreen(&self) {
            self.entered.fetch_add(1, Ordering::SeqCst);
        }

        fn on_exit_fullscreen(&self) {
            self.exited.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_redundant_calls_do_not_notify() {
        let mut coordinator = FullscreenCoordinator::new();
        let mut view = View::default();
        let transitions = Arc::new(Transitions::default());
        coordinator.add_listener(transitions.clone());

        assert!(!coordinator.exit(&mut view));
        assert!(coordinator.enter(&mut view));
        assert!(!coordinator.enter(&mut view));
        assert!(coordinator.is_fullscreen());

        assert_eq!(transitions.entered.load(Ordering::SeqCst), 1);
        assert_eq!(transitions.exited.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_enter_and_exit_restyle_view() {
        let mut coordinator = FullscreenCoordinator::new();
        let mut view = View::default();

        coordinator.enter(&mut view);
        assert_eq!(view.params.height, Dimension::MatchParent);
        assert_eq!(view.params.width, Dimension::MatchParent);

        coordinator.exit(&mut view);
        assert_eq!(view.params.height, Dimension::Auto);
    }

    #[test]
    fn test_toggle_sequence_parity() {
        let mut coordinator = FullscreenCoordinator::new();
        let mut view = View::default();
        let transitions = Arc::new(Transitions::default());
        coordinator.add_listener(transitions.clone());

        // enter, toggle(exit), toggle(enter), enter (no-op), exit, exit (no-op), toggle(enter)
        coordinator.enter(&mut view);
        coordinator.toggle(&mut view);
        coordinator.toggle(&mut view);
        coordinator.enter(&mut view);
        coordinator.exit(&mut view);
        coordinator.exit(&mut view);
        coordinator.toggle(&mut view);

        assert!(coordinator.is_fullscreen());
        assert_eq!(transitions.entered.load(Ordering::SeqCst), 3);
        assert_eq!(transitions.exited.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_registration_results() {
        let mut coordinator = FullscreenCoordinator::new();
        let listener: Arc<dyn FullscreenListener> = Arc::new(Transitions::default());

        assert!(coordinator.add_listener(listener.clone()));
        assert!(!coordinator.add_listener(listener.clone()));
        assert!(coordinator.remove_listener(&listener));
        assert!(!coordinator.remove_listener(&listener));
        assert_eq!(coordinator.listener_count(), 0);
    }
}
