//! Error types for epv-player
//!
//! The container itself has almost no fallible operations: engine errors arrive
//! as `PlayerEvent::Error` and a missing network registration is reported as
//! `Unregistration::NotRegistered`. These variants cover loading configuration
//! and simulation scenarios.

use thiserror::Error;

/// Main error type for epv-player
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors from epv-common
    #[error(transparent)]
    Common(#[from] epv_common::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario script could not be parsed
    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[from] toml::de::Error),
}

/// Convenience Result type using epv-player Error
pub type Result<T> = std::result::Result<T, Error>;
