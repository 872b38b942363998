//! Shared test helpers: recording listeners and a wired-up container

#![allow(dead_code)]

use epv_common::PlayerEvent;
use epv_player::controls::ControlSurface;
use epv_player::layout::ControlsView;
use epv_player::playback::ResumeCommand;
use epv_player::sim::{SimulatedEngine, SimulatedNetwork, SimulatedRegion};
use epv_player::{FullscreenListener, PlayerContainer, PlayerListener};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Container plus handles to every simulated collaborator
pub struct Harness {
    pub container: PlayerContainer,
    pub engine: SimulatedEngine,
    pub network: SimulatedNetwork,
    pub region: SimulatedRegion,
}

impl Harness {
    pub fn new(online: bool) -> Self {
        let engine = SimulatedEngine::new();
        let network = SimulatedNetwork::new(online);
        let region = SimulatedRegion::new();
        let container = PlayerContainer::new(engine.clone(), network.clone(), region.clone());
        Self {
            container,
            engine,
            network,
            region,
        }
    }

    /// Flip connectivity and let the container handle the signal
    pub fn set_online(&mut self, online: bool) -> Vec<ResumeCommand> {
        self.network.set_online(online);
        self.container.pump_network_events()
    }
}

/// Counts how often a ready callback ran
#[derive(Clone, Default)]
pub struct ReadyCounter(Arc<AtomicUsize>);

impl ReadyCounter {
    pub fn callback(&self) -> impl FnOnce(&mut dyn epv_player::PlaybackEngine) + Send + 'static {
        let count = self.0.clone();
        move |_: &mut dyn epv_player::PlaybackEngine| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Control surface recording everything it is told
#[derive(Default)]
pub struct RecordingSurface {
    pub events: Mutex<Vec<PlayerEvent>>,
    pub entered: AtomicUsize,
    pub exited: AtomicUsize,
    pub views: Mutex<Vec<ControlsView>>,
}

impl RecordingSurface {
    pub fn event_count(&self) -> usize {
        self.events.lock().len()
    }

    pub fn fullscreen_count(&self) -> usize {
        self.entered.load(Ordering::SeqCst) + self.exited.load(Ordering::SeqCst)
    }
}

impl PlayerListener for RecordingSurface {
    fn on_event(&self, event: &PlayerEvent) {
        self.events.lock().push(event.clone());
    }
}

impl FullscreenListener for RecordingSurface {
    fn on_enter_fullscreen(&self) {
        self.entered.fetch_add(1, Ordering::SeqCst);
    }

    fn on_exit_fullscreen(&self) {
        self.exited.fetch_add(1, Ordering::SeqCst);
    }
}

impl ControlSurface for RecordingSurface {
    fn on_controls_view_inflated(&self, view: ControlsView) {
        self.views.lock().push(view);
    }
}

/// Fullscreen listener counting transitions
#[derive(Default)]
pub struct FullscreenCounter {
    pub entered: AtomicUsize,
    pub exited: AtomicUsize,
}

impl FullscreenCounter {
    pub fn entered(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }

    pub fn exited(&self) -> usize {
        self.exited.load(Ordering::SeqCst)
    }
}

impl FullscreenListener for FullscreenCounter {
    fn on_enter_fullscreen(&self) {
        self.entered.fetch_add(1, Ordering::SeqCst);
    }

    fn on_exit_fullscreen(&self) {
        self.exited.fetch_add(1, Ordering::SeqCst);
    }
}
