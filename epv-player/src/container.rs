//! Player container - orchestration of engine, controls, network and fullscreen
//!
//! **Responsibilities:**
//! - Deferred engine startup gated on network availability
//! - Attaching internal listeners before the caller's ready callback
//! - Resuming playback when connectivity returns
//! - Swapping control surfaces without crossed notifications
//! - Fullscreen and 16:9 sizing
//!
//! Every method runs on the owner's thread. Events from the engine, the network
//! watcher and the host may arrive in any order relative to each other; the
//! pending-initialization slot is the only state they share.

use crate::controls::{ControlSurface, DefaultControlSurface};
use crate::engine::{PlaybackEngine, PlayerListener};
use crate::fullscreen::{FullscreenCoordinator, FullscreenListener};
use crate::layout::{self, DisplayRegion, LayoutDescriptor};
use crate::lifecycle::LifecycleEvent;
use crate::network::{NetworkSignal, NetworkWatcher, SubscriptionHandle, Unregistration};
use crate::playback::{InternalPlayerListener, PlaybackPositionTracker, ResumeCommand};
use epv_common::PlayerEvent;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type PendingSlot = Mutex<Option<PendingInit>>;

/// Work that runs once the engine reports a successful start
struct InitContinuation {
    on_ready: Box<dyn FnOnce(&mut dyn PlaybackEngine) + Send>,
    internal_listener: Arc<dyn PlayerListener>,
    clear_pending: Arc<dyn PlayerListener>,
}

impl InitContinuation {
    fn complete(self, engine: &mut dyn PlaybackEngine) {
        // Tracker first, so the caller can never emit an event it misses
        engine.add_listener(self.internal_listener);
        engine.add_listener(self.clear_pending);
        debug!("Internal listeners attached, invoking ready callback");
        (self.on_ready)(engine);
    }
}

/// Initialization requested but not yet confirmed by a ready event
struct PendingInit {
    /// Set once `engine.initialize` was issued for this request
    started: bool,
    /// Taken on the first init success; later launches are no-ops
    continuation: Arc<Mutex<Option<InitContinuation>>>,
}

/// Container-wide listener clearing the pending slot on engine ready.
///
/// Attached once, on the first init success, and shared by every later
/// request. A ready clears whichever request is current, provided its engine
/// start was issued; a request still waiting for connectivity is kept.
struct ClearPendingOnReady {
    pending_init: Weak<PendingSlot>,
}

impl PlayerListener for ClearPendingOnReady {
    fn on_event(&self, event: &PlayerEvent) {
        if !matches!(event, PlayerEvent::Ready) {
            return;
        }
        let Some(slot) = self.pending_init.upgrade() else {
            return;
        };
        let mut slot = slot.lock();
        match slot.as_ref().map(|pending| pending.started) {
            Some(true) => {
                *slot = None;
                info!("Engine ready, pending initialization cleared");
            }
            Some(false) => debug!("Engine ready before the pending request was started, kept"),
            None => {}
        }
    }
}

/// Top-level player orchestrator
pub struct PlayerContainer {
    engine: Box<dyn PlaybackEngine>,
    region: Box<dyn DisplayRegion>,
    network: Box<dyn NetworkWatcher>,
    controls: Arc<dyn ControlSurface>,
    tracker: Arc<PlaybackPositionTracker>,
    internal_listener: Arc<InternalPlayerListener>,
    fullscreen: FullscreenCoordinator,
    pending_init: Arc<PendingSlot>,
    clear_pending: Arc<ClearPendingOnReady>,
    subscription: Option<SubscriptionHandle>,
    network_tx: mpsc::UnboundedSender<NetworkSignal>,
    network_rx: mpsc::UnboundedReceiver<NetworkSignal>,
    released: bool,
}

impl PlayerContainer {
    /// Create a container with the default control surface
    pub fn new(
        engine: impl PlaybackEngine + 'static,
        network: impl NetworkWatcher + 'static,
        region: impl DisplayRegion + 'static,
    ) -> Self {
        Self::with_controls_layout(engine, network, region, LayoutDescriptor::default_controls())
    }

    /// Create a container, inflating `layout` for the default control surface
    pub fn with_controls_layout(
        engine: impl PlaybackEngine + 'static,
        network: impl NetworkWatcher + 'static,
        region: impl DisplayRegion + 'static,
        layout: LayoutDescriptor,
    ) -> Self {
        let tracker = Arc::new(PlaybackPositionTracker::new());
        let internal_listener = Arc::new(InternalPlayerListener::new(tracker.clone()));
        let (network_tx, network_rx) = mpsc::unbounded_channel();
        let controls: Arc<dyn ControlSurface> = Arc::new(DefaultControlSurface::new());
        let pending_init: Arc<PendingSlot> = Arc::new(Mutex::new(None));
        let clear_pending = Arc::new(ClearPendingOnReady {
            pending_init: Arc::downgrade(&pending_init),
        });

        let mut container = Self {
            engine: Box::new(engine),
            region: Box::new(region),
            network: Box::new(network),
            controls: controls.clone(),
            tracker,
            internal_listener,
            fullscreen: FullscreenCoordinator::new(),
            pending_init,
            clear_pending,
            subscription: None,
            network_tx,
            network_rx,
            released: false,
        };
        container.set_ui_controls(controls, &layout);
        container
    }

    /// Initialize the engine.
    ///
    /// Startup is deferred behind a pending task. The task runs now if the
    /// network is available, otherwise on the next [`on_network_available`].
    /// With `handle_network_events` the container subscribes to the network
    /// watcher; without it the host must forward connectivity itself.
    ///
    /// `on_ready` runs at most once, after the position tracker is attached.
    /// If the network never becomes available it never runs; there is no
    /// timeout.
    ///
    /// [`on_network_available`]: PlayerContainer::on_network_available
    pub fn initialize<F>(&mut self, on_ready: F, handle_network_events: bool)
    where
        F: FnOnce(&mut dyn PlaybackEngine) + Send + 'static,
    {
        assert!(
            !self.released,
            "initialize() called on a released player container"
        );

        if handle_network_events && self.subscription.is_none() {
            let handle = self.network.register(self.network_tx.clone());
            debug!("Registered with network watcher ({})", handle);
            self.subscription = Some(handle);
        }

        let continuation = InitContinuation {
            on_ready: Box::new(on_ready),
            internal_listener: self.internal_listener.clone(),
            clear_pending: self.clear_pending.clone(),
        };

        let replaced = self
            .pending_init
            .lock()
            .replace(PendingInit {
                started: false,
                continuation: Arc::new(Mutex::new(Some(continuation))),
            })
            .is_some();
        if replaced {
            warn!("initialize() called again before the engine was ready; previous request dropped");
        }

        if self.network.is_online() {
            self.run_pending_init();
        } else {
            info!("Network unavailable, initialization pending");
        }
    }

    /// Start the engine for the pending task, if any.
    ///
    /// Returns whether a pending task exists.
    fn run_pending_init(&mut self) -> bool {
        let continuation = {
            let mut slot = self.pending_init.lock();
            let Some(pending) = slot.as_mut() else {
                return false;
            };
            pending.started = true;
            pending.continuation.clone()
        };

        if continuation.lock().is_none() {
            debug!("Engine already started, waiting for ready");
            return true;
        }

        info!("Starting playback engine");
        self.engine.initialize(Box::new(move |engine: &mut dyn PlaybackEngine| {
            // Emptied before running so a second success callback does nothing
            let next = continuation.lock().take();
            if let Some(next) = next {
                next.complete(engine);
            }
        }));
        true
    }

    /// Destroy the engine and drop any pending initialization.
    ///
    /// Unregisters from the network watcher if registered. Not being
    /// registered is an expected outcome and is returned, not raised.
    ///
    /// # Panics
    ///
    /// If the container was already released.
    pub fn release(&mut self) -> Unregistration {
        assert!(!self.released, "player container released twice");
        self.released = true;

        self.engine.destroy();
        if self.pending_init.lock().take().is_some() {
            debug!("Dropped pending initialization on release");
        }

        let outcome = match self.subscription.take() {
            Some(handle) => self.network.unregister(handle),
            None => Unregistration::NotRegistered,
        };
        if outcome == Unregistration::NotRegistered {
            debug!("Network watcher was not registered");
        }

        info!("Player container released");
        outcome
    }

    /// Host went to the background: pause, keep the engine alive
    pub fn on_host_pause(&mut self) {
        if self.released {
            debug!("Host pause after release ignored");
            return;
        }
        self.engine.pause();
    }

    pub fn on_lifecycle_event(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Pause => self.on_host_pause(),
            LifecycleEvent::Destroy => {
                self.release();
            }
        }
    }

    /// Connectivity returned.
    ///
    /// Runs the pending initialization if there is one; only otherwise
    /// resumes playback from the last known position.
    pub fn on_network_available(&mut self) -> Option<ResumeCommand> {
        if self.released {
            debug!("Network available after release ignored");
            return None;
        }
        if self.run_pending_init() {
            return None;
        }
        self.tracker.resume(self.engine.as_mut())
    }

    pub fn on_network_unavailable(&mut self) {
        debug!("Network unavailable");
    }

    /// Dispatch queued watcher signals, returning the resumes they caused
    pub fn pump_network_events(&mut self) -> Vec<ResumeCommand> {
        let mut resumes = Vec::new();
        while let Ok(signal) = self.network_rx.try_recv() {
            match signal {
                NetworkSignal::Available => resumes.extend(self.on_network_available()),
                NetworkSignal::Unavailable => self.on_network_unavailable(),
            }
        }
        resumes
    }

    pub fn get_ui_controller(&self) -> Arc<dyn ControlSurface> {
        self.controls.clone()
    }

    /// Replace the control surface.
    ///
    /// Inflates `layout` into the region (removing the previous controls
    /// views), binds it to `controller`, then unlinks the outgoing surface
    /// from both event streams before linking the new one.
    pub fn set_ui_controls(&mut self, controller: Arc<dyn ControlSurface>, layout: &LayoutDescriptor) {
        self.region.clear_controls();
        let view = self.region.inflate(layout);
        controller.on_controls_view_inflated(view);

        let outgoing = std::mem::replace(&mut self.controls, controller);
        let outgoing_player: Arc<dyn PlayerListener> = outgoing.clone();
        let outgoing_fullscreen: Arc<dyn FullscreenListener> = outgoing;
        self.internal_listener.remove_listener(&outgoing_player);
        self.fullscreen.remove_listener(&outgoing_fullscreen);

        let incoming_player: Arc<dyn PlayerListener> = self.controls.clone();
        let incoming_fullscreen: Arc<dyn FullscreenListener> = self.controls.clone();
        self.internal_listener.add_listener(incoming_player);
        self.fullscreen.add_listener(incoming_fullscreen);

        debug!("Control surface bound to layout {}", layout);
    }

    pub fn enter_fullscreen(&mut self) -> bool {
        self.fullscreen.enter(self.region.as_mut())
    }

    pub fn exit_fullscreen(&mut self) -> bool {
        self.fullscreen.exit(self.region.as_mut())
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen.toggle(self.region.as_mut())
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    pub fn add_fullscreen_listener(&mut self, listener: Arc<dyn FullscreenListener>) -> bool {
        self.fullscreen.add_listener(listener)
    }

    pub fn remove_fullscreen_listener(&mut self, listener: &Arc<dyn FullscreenListener>) -> bool {
        self.fullscreen.remove_listener(listener)
    }

    /// Height to lay the container out at for `width`
    pub fn measure_height(&self, width: u32, host_height: u32) -> u32 {
        layout::measure_height(&self.region.layout_params(), width, host_height)
    }

    pub fn tracker(&self) -> &Arc<PlaybackPositionTracker> {
        &self.tracker
    }

    pub fn is_initialization_pending(&self) -> bool {
        self.pending_init.lock().is_some()
    }

    pub fn network_subscription(&self) -> Option<SubscriptionHandle> {
        self.subscription
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl std::fmt::Debug for PlayerContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerContainer")
            .field("pending_init", &self.is_initialization_pending())
            .field("fullscreen", &self.is_fullscreen())
            .field("subscription", &self.subscription)
            .field("released", &self.released)
            .finish()
    }
}
