//! Shared configuration for ideaminer binaries.
//!
//! All runtime knobs (bind address, Reddit base URL, analyzer credentials,
//! timeouts) come from environment variables with sensible defaults, loaded
//! into a single [`AppConfig`]. Network egress configuration (proxies) is
//! inherited from the standard environment variables understood by the HTTP
//! transport; nothing here hardcodes a relay.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
