//! Playback engine contract
//!
//! The engine is an external collaborator (an embedded web player, a native
//! pipeline, or `sim::SimulatedEngine` in tests). The container only relies on
//! the operations below and on the events delivered to registered listeners.

use epv_common::PlayerEvent;
use std::sync::Arc;

/// Callback invoked once the engine has started.
///
/// Receives the engine handle so the callee can register listeners and issue
/// the first commands.
pub type InitCallback = Box<dyn FnOnce(&mut dyn PlaybackEngine) + Send>;

/// Receives every event emitted by an engine
pub trait PlayerListener: Send + Sync {
    fn on_event(&self, event: &PlayerEvent);
}

/// Playback engine operations used by the container
pub trait PlaybackEngine: Send {
    /// Start the engine; `on_init_success` runs when it is up
    fn initialize(&mut self, on_init_success: InitCallback);

    /// Tear the engine down. The engine is unusable afterwards.
    fn destroy(&mut self);

    fn pause(&mut self);

    fn play(&mut self);

    fn seek_to(&mut self, seconds: f32);

    /// Load a video and start playing from `start_seconds`
    fn load_video(&mut self, video_id: &str, start_seconds: f32);

    /// Load a video and wait at `start_seconds` without playing
    fn cue_video(&mut self, video_id: &str, start_seconds: f32);

    /// Returns false if the listener was already registered
    fn add_listener(&mut self, listener: Arc<dyn PlayerListener>) -> bool;

    /// Returns false if the listener was not registered
    fn remove_listener(&mut self, listener: &Arc<dyn PlayerListener>) -> bool;
}
