//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOST` | `0.0.0.0` | Bind address |
//! | `PORT` | `8000` | Bind port (`FASTAPIPORT` is accepted too) |
//! | `LOG_LEVEL` | `info` | Log filter when `RUST_LOG` is unset |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value,
            })?,
            None => defaults.host,
        };

        let port = match lookup("PORT").or_else(|| lookup("FASTAPIPORT")) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            host,
            port,
            log_level,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_host_port_and_log_level() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "9000"), ("LOG_LEVEL", "debug")])
            .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn legacy_port_variable_is_honoured() {
        let config = load(&[("FASTAPIPORT", "8123")]).unwrap();
        assert_eq!(config.port, 8123);
    }

    #[test]
    fn port_takes_precedence_over_legacy_variable() {
        let config = load(&[("PORT", "8001"), ("FASTAPIPORT", "8123")]).unwrap();
        assert_eq!(config.port, 8001);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert_eq!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            })
        );
    }
}
