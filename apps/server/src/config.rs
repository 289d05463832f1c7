//! Server configuration.

use std::env;

/// Default listen port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Log level.
    pub log_level: String,
    /// Raw `PORT` value that failed to parse, reported once logging is up.
    pub rejected_port: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            rejected_port: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let (port, rejected_port) = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => (port, None),
                Err(_) => (DEFAULT_PORT, Some(raw)),
            },
            None => (DEFAULT_PORT, None),
        };

        Self {
            host: lookup("TASK_SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: lookup("TASK_SERVER_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            rejected_port,
        }
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_port_from_env() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rejected_port, None);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.rejected_port.as_deref(), Some("not-a-port"));
    }

    #[test]
    fn test_host_and_log_level() {
        let config = Config::from_lookup(lookup_from(&[
            ("TASK_SERVER_HOST", "127.0.0.1"),
            ("TASK_SERVER_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "debug");
    }
}
