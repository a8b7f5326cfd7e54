//! Service configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Runtime configuration.
///
/// Each field maps to the upper-cased environment variable of the same name
/// (`REDIS_HOST`, `REDIS_PORT`, `PORT`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Hostname of the key-value cache.
    #[serde(default = "default_redis_host")]
    pub redis_host: String,

    /// Port of the key-value cache.
    #[serde(default = "default_redis_port")]
    pub redis_port: u16,

    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_redis_host() -> String {
    "redis-cache".to_string()
}

fn default_redis_port() -> u16 {
    6379
}

fn default_port() -> u16 {
    4003
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: default_redis_host(),
            redis_port: default_redis_port(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from explicit key/value pairs instead of the
    /// process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Connection URL for the cache client.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    /// Address the HTTP listener binds to (all interfaces).
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.redis_host, "redis-cache");
        assert_eq!(config.redis_port, 6379);
        assert_eq!(config.port, 4003);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(vars(&[
            ("REDIS_HOST", "localhost"),
            ("REDIS_PORT", "6380"),
            ("PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.redis_host, "localhost");
        assert_eq!(config.redis_port, 6380);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Config::from_vars(vars(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn redis_url_combines_host_and_port() {
        let config = Config::default();
        assert_eq!(config.redis_url(), "redis://redis-cache:6379/");
    }

    #[test]
    fn listens_on_all_interfaces() {
        let config = Config {
            port: 8123,
            ..Config::default()
        };
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8123");
    }
}
