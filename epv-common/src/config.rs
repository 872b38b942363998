//! Bootstrap configuration loading
//!
//! Resolution order, first match wins:
//! 1. Explicit path (command-line argument)
//! 2. `EPV_CONFIG` environment variable
//! 3. Platform config file (`<config_dir>/epv/config.toml`)
//! 4. Built-in defaults
//!
//! A missing config file is not an error: a warning is logged and defaults are
//! used. A file that exists but does not parse is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "EPV_CONFIG";

/// Environment variable overriding `handle_network_events`
pub const HANDLE_NETWORK_ENV_VAR: &str = "EPV_HANDLE_NETWORK_EVENTS";

/// Player bootstrap configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Register with the network watcher during initialization
    #[serde(default = "default_handle_network_events")]
    pub handle_network_events: bool,

    /// Layout descriptor inflated for the default control surface
    #[serde(default = "default_controls_layout")]
    pub controls_layout: String,

    /// Whether the simulated network starts online
    #[serde(default = "default_start_online")]
    pub start_online: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_handle_network_events() -> bool {
    true
}

fn default_controls_layout() -> String {
    "player_controls".to_string()
}

fn default_start_online() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            handle_network_events: default_handle_network_events(),
            controls_layout: default_controls_layout(),
            start_online: default_start_online(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PlayerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve and load configuration, then apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        // An explicit path must exist
        if let Some(path) = explicit {
            debug!("Loading config from explicit path {}", path.display());
            return Self::from_file(path)?.with_env_overrides();
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            debug!("Loading config from {}={}", CONFIG_ENV_VAR, path);
            return Self::from_file(Path::new(&path))?.with_env_overrides();
        }

        let config = match default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading config from {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) => {
                warn!(
                    "Config file {} not found, using built-in defaults",
                    path.display()
                );
                Self::default()
            }
            None => {
                warn!("Could not determine config directory, using built-in defaults");
                Self::default()
            }
        };

        config.with_env_overrides()
    }

    /// Apply `EPV_HANDLE_NETWORK_EVENTS` if set
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var(HANDLE_NETWORK_ENV_VAR) {
            self.handle_network_events = parse_bool(&value).ok_or_else(|| {
                Error::InvalidInput(format!(
                    "{} must be true or false, got '{}'",
                    HANDLE_NETWORK_ENV_VAR, value
                ))
            })?;
        }
        Ok(self)
    }
}

/// Platform config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("epv").join("config.toml"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
