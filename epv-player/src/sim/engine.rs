//! Recording playback engine

use crate::engine::{InitCallback, PlaybackEngine, PlayerListener};
use crate::listeners::ListenerSet;
use epv_common::PlayerEvent;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Command received by the simulated engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EngineCommand {
    Initialize,
    Destroy,
    Pause,
    Play,
    SeekTo { seconds: f32 },
    LoadVideo { video_id: String, start_seconds: f32 },
    CueVideo { video_id: String, start_seconds: f32 },
}

#[derive(Default)]
struct EngineInner {
    commands: Vec<EngineCommand>,
    init_callbacks: VecDeque<InitCallback>,
    listeners: ListenerSet<dyn PlayerListener>,
    destroyed: bool,
}

/// Engine that records commands and emits events on demand.
///
/// Initialization completes only when [`complete_init`] is called, so tests
/// control exactly when the success callback runs.
///
/// [`complete_init`]: SimulatedEngine::complete_init
#[derive(Clone, Default)]
pub struct SimulatedEngine {
    inner: Arc<Mutex<EngineInner>>,
}

impl SimulatedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the oldest outstanding init-success callback.
    ///
    /// Returns false if `initialize` has not been called since the last one.
    pub fn complete_init(&self) -> bool {
        let callback = self.inner.lock().init_callbacks.pop_front();
        match callback {
            Some(callback) => {
                let mut handle = self.clone();
                let engine: &mut dyn PlaybackEngine = &mut handle;
                callback(engine);
                true
            }
            None => false,
        }
    }

    /// Deliver an event to every registered listener
    pub fn emit(&self, event: &PlayerEvent) {
        let listeners = self.inner.lock().listeners.snapshot();
        for listener in listeners {
            listener.on_event(event);
        }
    }

    pub fn commands(&self) -> Vec<EngineCommand> {
        self.inner.lock().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.inner.lock().commands.clear();
    }

    pub fn initialize_calls(&self) -> usize {
        self.inner
            .lock()
            .commands
            .iter()
            .filter(|c| **c == EngineCommand::Initialize)
            .count()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.lock().destroyed
    }

    fn record(&self, command: EngineCommand) {
        let mut inner = self.inner.lock();
        assert!(
            !inner.destroyed,
            "command {:?} sent to a destroyed engine",
            command
        );
        inner.commands.push(command);
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn initialize(&mut self, on_init_success: InitCallback) {
        self.record(EngineCommand::Initialize);
        self.inner.lock().init_callbacks.push_back(on_init_success);
    }

    fn destroy(&mut self) {
        self.record(EngineCommand::Destroy);
        let mut inner = self.inner.lock();
        inner.destroyed = true;
        inner.init_callbacks.clear();
    }

    fn pause(&mut self) {
        self.record(EngineCommand::Pause);
    }

    fn play(&mut self) {
        self.record(EngineCommand::Play);
    }

    fn seek_to(&mut self, seconds: f32) {
        self.record(EngineCommand::SeekTo { seconds });
    }

    fn load_video(&mut self, video_id: &str, start_seconds: f32) {
        self.record(EngineCommand::LoadVideo {
            video_id: video_id.to_string(),
            start_seconds,
        });
    }

    fn cue_video(&mut self, video_id: &str, start_seconds: f32) {
        self.record(EngineCommand::CueVideo {
            video_id: video_id.to_string(),
            start_seconds,
        });
    }

    fn add_listener(&mut self, listener: Arc<dyn PlayerListener>) -> bool {
        self.inner.lock().listeners.add(listener)
    }

    fn remove_listener(&mut self, listener: &Arc<dyn PlayerListener>) -> bool {
        self.inner.lock().listeners.remove(listener)
    }
}

impl std::fmt::Debug for SimulatedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SimulatedEngine")
            .field("commands", &inner.commands)
            .field("listeners", &inner.listeners.len())
            .field("destroyed", &inner.destroyed)
            .finish()
    }
}
