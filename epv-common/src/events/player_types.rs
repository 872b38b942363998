//! Player-related type definitions
//!
//! Supporting types for engine state, errors, quality and rate reports. Each
//! type can be parsed from the code the embedded player reports over its bridge.

use serde::{Deserialize, Serialize};

/// Playback state reported by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// Reported code not recognised
    Unknown,
    /// Player created, nothing loaded yet
    Unstarted,
    /// Playback reached the end of the video
    Ended,
    Playing,
    Paused,
    Buffering,
    /// Video loaded and waiting for play
    VideoCued,
}

impl PlayerState {
    /// Parse the numeric state code used by the embedded player
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => PlayerState::Unstarted,
            0 => PlayerState::Ended,
            1 => PlayerState::Playing,
            2 => PlayerState::Paused,
            3 => PlayerState::Buffering,
            5 => PlayerState::VideoCued,
            _ => PlayerState::Unknown,
        }
    }

    /// Whether playback should continue when this state is restored.
    ///
    /// Buffering only happens while the user expects the video to play.
    pub fn resumes_playing(&self) -> bool {
        matches!(self, PlayerState::Playing | PlayerState::Buffering)
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerState::Unknown => write!(f, "unknown"),
            PlayerState::Unstarted => write!(f, "unstarted"),
            PlayerState::Ended => write!(f, "ended"),
            PlayerState::Playing => write!(f, "playing"),
            PlayerState::Paused => write!(f, "paused"),
            PlayerState::Buffering => write!(f, "buffering"),
            PlayerState::VideoCued => write!(f, "video_cued"),
        }
    }
}

/// Error kind reported by the engine's error callback
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerError {
    Unknown,
    /// The request contained an invalid parameter value (code 2)
    InvalidParameterInRequest,
    /// The HTML5 player could not play the content (code 5)
    Html5Player,
    /// Video removed or marked private (code 100)
    VideoNotFound,
    /// Owner does not allow embedded playback (codes 101 and 150)
    VideoNotPlayableInEmbeddedPlayer,
}

impl PlayerError {
    pub fn from_code(code: &str) -> Self {
        match code {
            "2" => PlayerError::InvalidParameterInRequest,
            "5" => PlayerError::Html5Player,
            "100" => PlayerError::VideoNotFound,
            "101" | "150" => PlayerError::VideoNotPlayableInEmbeddedPlayer,
            _ => PlayerError::Unknown,
        }
    }
}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::Unknown => write!(f, "unknown"),
            PlayerError::InvalidParameterInRequest => write!(f, "invalid parameter in request"),
            PlayerError::Html5Player => write!(f, "html5 player error"),
            PlayerError::VideoNotFound => write!(f, "video not found"),
            PlayerError::VideoNotPlayableInEmbeddedPlayer => {
                write!(f, "video not playable in embedded player")
            }
        }
    }
}

/// Playback quality reported by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackQuality {
    Unknown,
    Small,
    Medium,
    Large,
    Hd720,
    Hd1080,
    HighRes,
    Default,
}

impl PlaybackQuality {
    pub fn from_code(code: &str) -> Self {
        match code {
            "small" => PlaybackQuality::Small,
            "medium" => PlaybackQuality::Medium,
            "large" => PlaybackQuality::Large,
            "hd720" => PlaybackQuality::Hd720,
            "hd1080" => PlaybackQuality::Hd1080,
            "highres" => PlaybackQuality::HighRes,
            "default" => PlaybackQuality::Default,
            _ => PlaybackQuality::Unknown,
        }
    }
}

/// Playback rate reported by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackRate {
    Unknown,
    Rate0_25,
    Rate0_5,
    Rate1,
    Rate1_5,
    Rate2,
}

impl PlaybackRate {
    pub fn from_code(code: &str) -> Self {
        match code {
            "0.25" => PlaybackRate::Rate0_25,
            "0.5" => PlaybackRate::Rate0_5,
            "1" => PlaybackRate::Rate1,
            "1.5" => PlaybackRate::Rate1_5,
            "2" => PlaybackRate::Rate2,
            _ => PlaybackRate::Unknown,
        }
    }

    /// Speed multiplier, `None` when the rate is unknown
    pub fn multiplier(&self) -> Option<f32> {
        match self {
            PlaybackRate::Unknown => None,
            PlaybackRate::Rate0_25 => Some(0.25),
            PlaybackRate::Rate0_5 => Some(0.5),
            PlaybackRate::Rate1 => Some(1.0),
            PlaybackRate::Rate1_5 => Some(1.5),
            PlaybackRate::Rate2 => Some(2.0),
        }
    }
}
