//! Server configuration from environment

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read `BLUEPRINT_HOST`, `BLUEPRINT_PORT` and `BLUEPRINT_LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("BLUEPRINT_HOST").unwrap_or(defaults.host),
            port: lookup("BLUEPRINT_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("BLUEPRINT_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Apply CLI overrides on top of the environment
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid host address '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_lookup_and_overrides() {
        let env: HashMap<&str, &str> = [
            ("BLUEPRINT_HOST", "0.0.0.0"),
            ("BLUEPRINT_PORT", "not-a-port"),
            ("BLUEPRINT_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, "debug");

        let config = config.with_overrides(None, Some(9000));
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn test_bad_host() {
        let config = ServerConfig::default().with_overrides(Some("localhost:1".into()), None);
        assert!(config.socket_addr().is_err());
    }
}
