//! Bridge messages from the embedded player
//!
//! The player page reports events as a message name plus a string payload.
//! `WireDecoder` turns those into [`PlayerEvent`]s. State changes carry no
//! position on the wire, so the decoder stamps them with the last reported
//! second.

use super::{PlaybackQuality, PlaybackRate, PlayerError, PlayerEvent, PlayerState};
use crate::{Error, Result};
use tracing::trace;

#[derive(Debug, Default)]
pub struct WireDecoder {
    last_second: f32,
}

impl WireDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one bridge message.
    ///
    /// Unknown message names and unparsable numeric payloads are rejected.
    /// Unrecognised state, error, quality and rate codes decode to their
    /// `Unknown` variants.
    pub fn decode(&mut self, message: &str, payload: &str) -> Result<PlayerEvent> {
        let payload = payload.trim();
        let event = match message {
            "ready" => PlayerEvent::Ready,
            "api_change" => PlayerEvent::ApiChange,
            "state_change" => {
                let code = payload.parse::<i32>().map_err(|_| {
                    Error::InvalidInput(format!("state code '{}' is not an integer", payload))
                })?;
                PlayerEvent::StateChange {
                    state: PlayerState::from_code(code),
                    position: self.last_second,
                }
            }
            "playback_quality_change" => PlayerEvent::PlaybackQualityChange {
                quality: PlaybackQuality::from_code(payload),
            },
            "playback_rate_change" => PlayerEvent::PlaybackRateChange {
                rate: PlaybackRate::from_code(payload),
            },
            "error" => PlayerEvent::Error {
                error: PlayerError::from_code(payload),
            },
            "current_seconds" => {
                let second = parse_seconds(message, payload)?;
                self.last_second = second;
                PlayerEvent::CurrentSecond { second }
            }
            "video_duration" => PlayerEvent::VideoDuration {
                duration: parse_seconds(message, payload)?,
            },
            "video_loaded_fraction" => PlayerEvent::VideoLoadedFraction {
                fraction: parse_seconds(message, payload)?,
            },
            "video_id" => {
                // A new video starts from the beginning
                self.last_second = 0.0;
                PlayerEvent::VideoId {
                    video_id: payload.to_string(),
                }
            }
            other => {
                return Err(Error::InvalidInput(format!(
                    "unknown bridge message '{}'",
                    other
                )))
            }
        };
        trace!("Decoded bridge message {} as {}", message, event.name());
        Ok(event)
    }
}

fn parse_seconds(message: &str, payload: &str) -> Result<f32> {
    payload
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            Error::InvalidInput(format!("{} payload '{}' is not a number", message, payload))
        })
}
