//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "HIGHWAY_ADDR";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {value}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Create a configuration listening on `addr`.
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Read the configuration from the environment.
    ///
    /// Unset variables fall back to [`ServerConfig::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError {
                var: ADDR_VAR,
                value,
            })?;
        }
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn unset_variable_uses_default() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn address_from_variable() {
        let config = ServerConfig::from_lookup(|var| {
            (var == ADDR_VAR).then(|| "0.0.0.0:8080".to_string())
        })
        .unwrap();
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn invalid_address() {
        let err = ServerConfig::from_lookup(|_| Some("not-an-address".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "invalid HIGHWAY_ADDR: not-an-address");
    }
}
