//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// A configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    #[error("invalid BIND_ADDR: {value:?}")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Overrides the Leptos site root that `/pkg` assets are served from.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SITE_ROOT`: default from the Leptos configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr { value: raw.clone() })?,
            None => DEFAULT_BIND_ADDR,
        };
        let site_root = lookup("SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { bind_addr, port, site_root })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
