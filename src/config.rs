use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::api_connection::endpoints::DEFAULT_ENDPOINT;
use crate::generator::DEFAULT_MAX_DUPLICATE_RETRIES;

pub const ENDPOINT_ENV_VAR: &str = "RECIPE_API_ENDPOINT";
pub const TIMEOUT_ENV_VAR: &str = "RECIPE_API_TIMEOUT_SECS";
pub const MAX_DUPLICATE_RETRIES_ENV_VAR: &str = "RECIPE_MAX_DUPLICATE_RETRIES";
pub const STORE_PATH_ENV_VAR: &str = "RECIPE_STORE_PATH";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_STORE_PATH: &str = "saved_recipes.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub request_timeout: Duration,
    /// How many times a batch slot is regenerated after a duplicate name before the duplicate is kept.
    pub max_duplicate_retries: u32,
    pub store_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_duplicate_retries: DEFAULT_MAX_DUPLICATE_RETRIES,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl GeneratorConfig {
    /// Reads the configuration from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs: u64 = parse_var(TIMEOUT_ENV_VAR, &raw)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    var: TIMEOUT_ENV_VAR,
                    value: raw,
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup(MAX_DUPLICATE_RETRIES_ENV_VAR) {
            config.max_duplicate_retries = parse_var(MAX_DUPLICATE_RETRIES_ENV_VAR, &raw)?;
        }
        if let Some(path) = lookup(STORE_PATH_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = GeneratorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_duplicate_retries, 3);
    }

    #[test]
    fn reads_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV_VAR, "https://example.test/recipe"),
            (TIMEOUT_ENV_VAR, "5"),
            (MAX_DUPLICATE_RETRIES_ENV_VAR, "0"),
            (STORE_PATH_ENV_VAR, "/tmp/recipes.json"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "https://example.test/recipe");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_duplicate_retries, 0);
        assert_eq!(config.store_path, PathBuf::from("/tmp/recipes.json"));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: TIMEOUT_ENV_VAR, .. }));

        let err = GeneratorConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: TIMEOUT_ENV_VAR, .. }));
    }
}
