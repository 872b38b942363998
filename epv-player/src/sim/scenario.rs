//! Scripted scenarios
//!
//! A scenario is a TOML list of host, network and engine events replayed in
//! order against a container wired to the simulated collaborators:
//!
//! ```toml
//! [[steps]]
//! action = "initialize"
//! handle_network_events = true
//! video_id = "M7lc1UVf-VE"
//!
//! [[steps]]
//! action = "set_online"
//! online = true
//!
//! [[steps]]
//! action = "complete_engine_init"
//!
//! [[steps]]
//! action = "engine_event"
//! event = { type = "ready" }
//! ```

use super::{EngineCommand, SimulatedEngine, SimulatedNetwork, SimulatedRegion};
use crate::container::PlayerContainer;
use crate::controls::ControlsSnapshot;
use crate::engine::PlaybackEngine;
use crate::layout::{HostView, LayoutDescriptor, LayoutParams};
use crate::lifecycle::LifecycleEvent;
use crate::playback::{PlaybackSnapshot, ResumeCommand};
use crate::Result;
use chrono::{DateTime, Utc};
use epv_common::{PlayerConfig, PlayerEvent, WireDecoder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One scripted event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// `PlayerContainer::initialize`; the ready callback loads `video_id` if given
    Initialize {
        /// Falls back to the config value
        #[serde(default)]
        handle_network_events: Option<bool>,
        #[serde(default)]
        video_id: Option<String>,
    },
    /// Flip simulated connectivity, then pump watcher signals
    SetOnline { online: bool },
    /// Call the container directly, as a host with its own watcher would
    NetworkAvailable,
    NetworkUnavailable,
    /// Run the engine's pending init-success callback
    CompleteEngineInit,
    EngineEvent { event: PlayerEvent },
    /// Raw bridge message from the player page, decoded then emitted
    BridgeMessage {
        message: String,
        #[serde(default)]
        payload: String,
    },
    HostPause,
    HostDestroy,
    EnterFullscreen,
    ExitFullscreen,
    ToggleFullscreen,
    SetVideoTitle { title: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

/// State of the container after a scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub steps_run: usize,
    pub ready_callbacks: usize,
    pub initialization_pending: bool,
    pub network_subscribed: bool,
    pub released: bool,
    pub fullscreen: bool,
    pub layout: LayoutParams,
    pub resumes: Vec<ResumeCommand>,
    pub engine_commands: Vec<EngineCommand>,
    pub playback: Option<PlaybackSnapshot>,
    pub controls: Option<ControlsSnapshot>,
    pub generated_at: DateTime<Utc>,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Replay every step and report the final state
    pub fn run(&self, config: &PlayerConfig) -> ScenarioReport {
        let engine = SimulatedEngine::new();
        let network = SimulatedNetwork::new(config.start_online);
        let region = SimulatedRegion::new();
        let mut container = PlayerContainer::with_controls_layout(
            engine.clone(),
            network.clone(),
            region.clone(),
            LayoutDescriptor::new(config.controls_layout.clone()),
        );

        let ready_callbacks = Arc::new(AtomicUsize::new(0));
        let mut resumes = Vec::new();
        let mut decoder = WireDecoder::new();

        for (index, step) in self.steps.iter().enumerate() {
            debug!("Scenario step {}: {:?}", index, step);
            match step {
                ScenarioStep::Initialize {
                    handle_network_events,
                    video_id,
                } => {
                    if container.is_released() {
                        warn!("Step {}: container released, initialize skipped", index);
                        continue;
                    }
                    let counter = ready_callbacks.clone();
                    let video_id = video_id.clone();
                    container.initialize(
                        move |engine: &mut dyn PlaybackEngine| {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(video_id) = video_id {
                                engine.load_video(&video_id, 0.0);
                            }
                        },
                        handle_network_events.unwrap_or(config.handle_network_events),
                    );
                }
                ScenarioStep::SetOnline { online } => {
                    network.set_online(*online);
                    resumes.extend(container.pump_network_events());
                }
                ScenarioStep::NetworkAvailable => {
                    resumes.extend(container.on_network_available());
                }
                ScenarioStep::NetworkUnavailable => container.on_network_unavailable(),
                ScenarioStep::CompleteEngineInit => {
                    if !engine.complete_init() {
                        warn!("Step {}: engine has no pending init callback", index);
                    }
                }
                ScenarioStep::EngineEvent { event } => engine.emit(event),
                ScenarioStep::BridgeMessage { message, payload } => {
                    match decoder.decode(message, payload) {
                        Ok(event) => engine.emit(&event),
                        Err(e) => warn!("Step {}: bridge message dropped: {}", index, e),
                    }
                }
                ScenarioStep::HostPause => container.on_lifecycle_event(LifecycleEvent::Pause),
                ScenarioStep::HostDestroy => {
                    if container.is_released() {
                        warn!("Step {}: container already released", index);
                    } else {
                        container.on_lifecycle_event(LifecycleEvent::Destroy);
                    }
                }
                ScenarioStep::EnterFullscreen => {
                    container.enter_fullscreen();
                }
                ScenarioStep::ExitFullscreen => {
                    container.exit_fullscreen();
                }
                ScenarioStep::ToggleFullscreen => {
                    container.toggle_fullscreen();
                }
                ScenarioStep::SetVideoTitle { title } => {
                    container.get_ui_controller().set_video_title(title)
                }
            }
        }

        info!("Scenario finished after {} steps", self.steps.len());
        ScenarioReport {
            steps_run: self.steps.len(),
            ready_callbacks: ready_callbacks.load(Ordering::SeqCst),
            initialization_pending: container.is_initialization_pending(),
            network_subscribed: network.observer_count() > 0,
            released: container.is_released(),
            fullscreen: container.is_fullscreen(),
            layout: region.layout_params(),
            resumes,
            engine_commands: engine.commands(),
            playback: container.tracker().snapshot(),
            controls: container.get_ui_controller().snapshot(),
            generated_at: Utc::now(),
        }
    }
}
