//! # Node Configuration
//!
//! Runtime parameters for the Ignite node, with sane defaults and
//! environment-variable overrides.
//!
//! ## Environment Variables
//!
//! - `IGNITE_HEARTBEAT_SECS` - keepalive publish interval (default 30)
//! - `IGNITE_SEED_DEMO` - seed demo data on a cold start (default true)
//! - `IGNITE_SNAPSHOT_PATH` - JSON snapshot file for restarts (optional)

use std::path::PathBuf;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Seconds between heartbeat events; keeps long-lived subscriber
    /// connections from idling out.
    pub heartbeat_interval_secs: u64,
    /// Whether to seed demo data when starting with empty state.
    pub seed_demo_data: bool,
    /// Snapshot file restored at startup and written at shutdown.
    /// None disables persistence entirely.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval_secs: 30,
            seed_demo_data: true,
            snapshot_path: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero heartbeat interval would spin the publish loop.
    #[error("heartbeat interval must be at least 1 second")]
    ZeroHeartbeatInterval,
    /// An environment override could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidOverride { var: String, value: String },
}

impl NodeConfig {
    /// Loads configuration from the environment on top of defaults.
    ///
    /// # Errors
    ///
    /// `InvalidOverride` for unparseable variables, `ZeroHeartbeatInterval`
    /// if the result fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("IGNITE_HEARTBEAT_SECS") {
            config.heartbeat_interval_secs =
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidOverride {
                        var: "IGNITE_HEARTBEAT_SECS".into(),
                        value,
                    })?;
        }

        if let Ok(value) = std::env::var("IGNITE_SEED_DEMO") {
            config.seed_demo_data = match value.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidOverride {
                        var: "IGNITE_SEED_DEMO".into(),
                        value,
                    })
                }
            };
        }

        if let Ok(value) = std::env::var("IGNITE_SNAPSHOT_PATH") {
            if !value.is_empty() {
                config.snapshot_path = Some(PathBuf::from(value));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `ZeroHeartbeatInterval` if the heartbeat interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heartbeat_interval_secs == 0 {
            return Err(ConfigError::ZeroHeartbeatInterval);
        }
        Ok(())
    }
}
