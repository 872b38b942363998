//! # EPV Common Library
//!
//! Shared code for the embeddable player view crates:
//! - Player event types (`PlayerEvent` and its supporting enums)
//! - Decoding of bridge messages from the embedded player
//! - Bootstrap configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod events;

pub use config::PlayerConfig;
pub use error::{Error, Result};
pub use events::{
    PlaybackQuality, PlaybackRate, PlayerError, PlayerEvent, PlayerState, WireDecoder,
};
