//! Centralized configuration (environment variables + defaults).

use thiserror::Error;

pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/items";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection string. When absent the server keeps players in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Origin allowed by CORS (the browser client).
    pub client_origin: String,
    pub host: String,
    pub port: u16,
    /// Base URL of the items endpoint, used by the client.
    pub api_url: String,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: "DATABASE_MAX_CONNECTIONS",
                    expected: "a positive integer",
                    value: v,
                })?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        let port = match get("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                expected: "a TCP port number",
                value: v.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL"),
            database_max_connections,
            client_origin: get("CLIENT_ORIGIN").unwrap_or_else(|| DEFAULT_CLIENT_ORIGIN.into()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            api_url: get("API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
        })
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            client_origin: DEFAULT_CLIENT_ORIGIN.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.listen_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/players"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("CLIENT_ORIGIN", "http://example.test"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("API_URL", "http://api.test/api/items"),
        ]))
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/players")
        );
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.client_origin, "http://example.test");
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.api_url, "http://api.test/api/items");
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn invalid_numbers_are_errors() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("PORT", "http")])),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")])),
            Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                ..
            })
        ));
    }
}
