use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TASKLIST_PORT: {0}")]
    Port(#[from] std::num::ParseIntError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL the client subcommands talk to.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            api_url: format!("http://127.0.0.1:{DEFAULT_PORT}"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("TASKLIST_PORT") {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("TASKLIST_HOST").unwrap_or(defaults.host),
            port,
            api_url: lookup("TASKLIST_URL").unwrap_or(defaults.api_url),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TASKLIST_HOST", "127.0.0.1"),
            ("TASKLIST_PORT", "8080"),
            ("TASKLIST_URL", "http://tasks.local"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.api_url, "http://tasks.local");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("TASKLIST_PORT", "abc")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid TASKLIST_PORT"));
    }
}
