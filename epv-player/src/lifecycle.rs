//! Host lifecycle signals
//!
//! The host (an activity, a window, an embedding page) forwards these to
//! `PlayerContainer::on_lifecycle_event`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Host moved to the background; playback pauses
    Pause,
    /// Host is going away; the container is released
    Destroy,
}
