//! Internal engine listener
//!
//! The container registers exactly one of these on the engine. It feeds the
//! position tracker first, then forwards the event to whichever listeners are
//! linked at that moment (the active control surface). Linking happens here
//! rather than on the engine so surfaces can be swapped before the engine has
//! started.

use crate::engine::PlayerListener;
use crate::listeners::ListenerSet;
use crate::playback::PlaybackPositionTracker;
use epv_common::PlayerEvent;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

pub struct InternalPlayerListener {
    tracker: Arc<PlaybackPositionTracker>,
    listeners: Mutex<ListenerSet<dyn PlayerListener>>,
}

impl InternalPlayerListener {
    pub fn new(tracker: Arc<PlaybackPositionTracker>) -> Self {
        Self {
            tracker,
            listeners: Mutex::new(ListenerSet::new()),
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn PlayerListener>) -> bool {
        self.listeners.lock().add(listener)
    }

    pub fn remove_listener(&self, listener: &Arc<dyn PlayerListener>) -> bool {
        self.listeners.lock().remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl PlayerListener for InternalPlayerListener {
    fn on_event(&self, event: &PlayerEvent) {
        trace!("Dispatching engine event {}", event.name());
        self.tracker.on_event(event);

        let listeners = self.listeners.lock().snapshot();
        for listener in listeners {
            listener.on_event(event);
        }
    }
}

impl std::fmt::Debug for InternalPlayerListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalPlayerListener")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
