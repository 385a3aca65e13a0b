use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub api_prefix: String,

    // Logging
    pub log_dir: String,
    pub log_level: String,

    /// Requests per minute per peer IP on the API scope; 0 disables the limiter
    pub rate_per_min: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:5000".to_string(),
            database_url: "sqlite://hrms_lite.db".to_string(),
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
            rate_per_min: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or(defaults.server_addr),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            api_prefix: lookup("API_PREFIX").unwrap_or(defaults.api_prefix),
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            rate_per_min: parse_number(&lookup, "RATE_PER_MIN", defaults.rate_per_min)?,
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_vars_fall_back_to_defaults() {
        let cfg = Config::from_vars(|_| None).unwrap();
        assert_eq!(cfg.server_addr, "0.0.0.0:5000");
        assert_eq!(cfg.api_prefix, "/api");
        assert_eq!(cfg.rate_per_min, 1000);
    }

    #[test]
    fn vars_override_defaults() {
        let env = vars(&[
            ("SERVER_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("RATE_PER_MIN", " 0 "),
        ]);
        let cfg = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(cfg.server_addr, "127.0.0.1:8080");
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.rate_per_min, 0);
    }

    #[test]
    fn bad_number_is_an_error() {
        let env = vars(&[("RATE_PER_MIN", "lots")]);
        let err = Config::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "RATE_PER_MIN", .. }));
    }
}
