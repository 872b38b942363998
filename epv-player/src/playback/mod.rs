//! Playback position tracking and engine event fan-out

pub mod fanout;
pub mod tracker;

pub use fanout::InternalPlayerListener;
pub use tracker::{PlaybackPositionTracker, PlaybackSnapshot, ResumeCommand};
