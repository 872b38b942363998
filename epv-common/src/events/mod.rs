//! Event types emitted by a playback engine
//!
//! Every listener registered on an engine receives these through a single
//! `PlayerEvent` enum so handlers can match exhaustively.

mod player_types;
mod wire;

pub use player_types::{PlaybackQuality, PlaybackRate, PlayerError, PlayerState};
pub use wire::WireDecoder;

use serde::{Deserialize, Serialize};

/// Engine events
///
/// Serializable so that simulated scenarios can replay them from a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// Engine finished loading and accepts commands
    Ready,

    /// Playback state changed
    StateChange {
        state: PlayerState,
        /// Playback position when the change happened (seconds)
        position: f32,
    },

    PlaybackQualityChange { quality: PlaybackQuality },

    PlaybackRateChange { rate: PlaybackRate },

    /// Engine reported an error. Not retried by the container.
    Error { error: PlayerError },

    /// Engine API module loaded or unloaded
    ApiChange,

    /// Periodic position tick (seconds)
    CurrentSecond { second: f32 },

    VideoDuration { duration: f32 },

    /// Fraction of the video buffered so far (0.0-1.0)
    VideoLoadedFraction { fraction: f32 },

    /// Id of the video now loaded
    VideoId { video_id: String },
}

impl PlayerEvent {
    /// Short event name for logging
    pub fn name(&self) -> &'static str {
        match self {
            PlayerEvent::Ready => "ready",
            PlayerEvent::StateChange { .. } => "state_change",
            PlayerEvent::PlaybackQualityChange { .. } => "playback_quality_change",
            PlayerEvent::PlaybackRateChange { .. } => "playback_rate_change",
            PlayerEvent::Error { .. } => "error",
            PlayerEvent::ApiChange => "api_change",
            PlayerEvent::CurrentSecond { .. } => "current_second",
            PlayerEvent::VideoDuration { .. } => "video_duration",
            PlayerEvent::VideoLoadedFraction { .. } => "video_loaded_fraction",
            PlayerEvent::VideoId { .. } => "video_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_tagging() {
        let event = PlayerEvent::StateChange {
            state: PlayerState::Playing,
            position: 42.0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "state_change");
        assert_eq!(json["state"], "playing");

        let parsed: PlayerEvent =
            serde_json::from_str(r#"{"type":"video_id","video_id":"abc"}"#).unwrap();
        assert_eq!(
            parsed,
            PlayerEvent::VideoId {
                video_id: "abc".to_string()
            }
        );
    }
}
