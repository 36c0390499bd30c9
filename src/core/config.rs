//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with server and reminders settings

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime configuration, read once at startup.
///
/// Everything has a default; a bare environment yields a working server.
///
/// | Variable                 | Default        | Meaning                                   |
/// |--------------------------|----------------|-------------------------------------------|
/// | `BIND_ADDR`              | `0.0.0.0:8080` | Address the webhook endpoint listens on   |
/// | `LOG_LEVEL`              | `info`         | Default log filter                        |
/// | `REMINDERS_API_BASE`     | *(unset)*      | Override of the per-request API endpoint  |
/// | `REMINDERS_TIMEOUT_SECS` | `10`           | Timeout for the create-reminder call      |
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// When set, all Reminders API calls go here instead of the endpoint the
    /// envelope carries. Meant for pointing at a local stand-in API.
    pub reminders_api_base: Option<String>,
    pub reminders_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let reminders_api_base = env::var("REMINDERS_API_BASE").ok().filter(|s| !s.is_empty());

        let reminders_timeout = match env::var("REMINDERS_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .context("REMINDERS_TIMEOUT_SECS is not a number")?,
            ),
            Err(_) => Duration::from_secs(10),
        };

        Ok(Config {
            bind_addr,
            log_level,
            reminders_api_base,
            reminders_timeout,
        })
    }
}
