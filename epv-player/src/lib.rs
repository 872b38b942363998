//! # EPV Player Library (epv-player)
//!
//! Embeddable player container that coordinates a playback engine, a
//! replaceable control surface, network availability, host lifecycle and
//! fullscreen presentation.
//!
//! **Architecture:** `PlayerContainer` owns the engine and every coordinator.
//! All state transitions run on the owner's thread; the engine, network watcher
//! and display region are external collaborators behind traits so they can be
//! replaced by the simulated implementations in [`sim`].

pub mod container;
pub mod controls;
pub mod engine;
pub mod error;
pub mod fullscreen;
pub mod layout;
pub mod lifecycle;
pub mod listeners;
pub mod network;
pub mod playback;
pub mod sim;

pub use container::PlayerContainer;
pub use controls::{ControlSurface, DefaultControlSurface};
pub use engine::{PlaybackEngine, PlayerListener};
pub use error::{Error, Result};
pub use fullscreen::{FullscreenCoordinator, FullscreenListener};
pub use playback::PlaybackPositionTracker;
