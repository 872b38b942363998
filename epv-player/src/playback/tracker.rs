//! Last-known playback position
//!
//! The tracker listens to engine events and keeps the last observed state,
//! position and video id outside the engine, so playback can be re-established
//! on a re-created or suspended engine.

use crate::engine::{PlaybackEngine, PlayerListener};
use chrono::{DateTime, Utc};
use epv_common::{PlayerEvent, PlayerState};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

/// Last recorded playback position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    pub state: PlayerState,
    /// Position in seconds
    pub position: f32,
    pub video_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Command issued by [`PlaybackPositionTracker::resume`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ResumeCommand {
    /// Reload the video and play from position
    Load { video_id: String, position: f32 },
    /// Reload the video and hold at position
    Cue { video_id: String, position: f32 },
    SeekAndPlay { position: f32 },
    SeekAndPause { position: f32 },
}

#[derive(Debug, Default)]
struct TrackerState {
    state: Option<PlayerState>,
    position: f32,
    video_id: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

/// Remembers where playback was and replays it onto an engine
#[derive(Debug, Default)]
pub struct PlaybackPositionTracker {
    inner: Mutex<TrackerState>,
}

impl PlaybackPositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded position, `None` until a state change has been observed
    pub fn snapshot(&self) -> Option<PlaybackSnapshot> {
        let inner = self.inner.lock();
        let state = inner.state?;
        Some(PlaybackSnapshot {
            state,
            position: inner.position,
            video_id: inner.video_id.clone(),
            updated_at: inner.updated_at.unwrap_or_else(Utc::now),
        })
    }

    /// Re-issue the last recorded playback onto `engine`.
    ///
    /// Plays if the last state was playing (or buffering), otherwise holds
    /// paused at the recorded position. Does nothing if no state was recorded.
    pub fn resume(&self, engine: &mut dyn PlaybackEngine) -> Option<ResumeCommand> {
        let Some(snapshot) = self.snapshot() else {
            debug!("Resume requested with no recorded playback, nothing to do");
            return None;
        };

        let playing = snapshot.state.resumes_playing();
        let position = snapshot.position;
        let command = match (snapshot.video_id, playing) {
            (Some(video_id), true) => {
                engine.load_video(&video_id, position);
                ResumeCommand::Load { video_id, position }
            }
            (Some(video_id), false) => {
                engine.cue_video(&video_id, position);
                ResumeCommand::Cue { video_id, position }
            }
            (None, true) => {
                engine.seek_to(position);
                engine.play();
                ResumeCommand::SeekAndPlay { position }
            }
            (None, false) => {
                engine.seek_to(position);
                engine.pause();
                ResumeCommand::SeekAndPause { position }
            }
        };

        info!("Resumed playback: {:?}", command);
        Some(command)
    }
}

impl PlayerListener for PlaybackPositionTracker {
    fn on_event(&self, event: &PlayerEvent) {
        let mut inner = self.inner.lock();
        match event {
            PlayerEvent::StateChange { state, position } => {
                inner.state = Some(*state);
                inner.position = *position;
            }
            PlayerEvent::CurrentSecond { second } => {
                inner.position = *second;
            }
            PlayerEvent::VideoId { video_id } => {
                inner.video_id = Some(video_id.clone());
            }
            _ => return,
        }
        inner.updated_at = Some(Utc::now());
    }
}
