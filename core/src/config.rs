use crate::error::{CoreError, CoreResult};
use crate::util::strings::safe_trim;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_ENVIRONMENT: &str = "NUBES_ENV";
pub const ENV_API_BASE_URL: &str = "NUBES_API_BASE_URL";
pub const ENV_API_TIMEOUT_MS: &str = "NUBES_API_TIMEOUT_MS";

pub const DEFAULT_API_TIMEOUT_MS: u64 = 2000;
/// Used when the configured timeout is 0.
pub const FALLBACK_API_TIMEOUT_MS: u64 = 15000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    #[default]
    Production,
    Test,
}

impl Environment {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Production,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiServerConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_API_TIMEOUT_MS
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl ApiServerConfig {
    pub fn effective_timeout_ms(&self) -> u64 {
        if self.timeout_ms == 0 {
            FALLBACK_API_TIMEOUT_MS
        } else {
            self.timeout_ms
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub api: ApiServerConfig,
}

impl AppConfig {
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Builds a config from a variable lookup; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();
        if let Some(env) = lookup(ENV_ENVIRONMENT) {
            cfg.environment = Environment::parse(&env);
        }
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            cfg.api.base_url = safe_trim(Some(&url), None, None);
        }
        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            let raw = safe_trim(Some(&raw), None, None);
            cfg.api.timeout_ms = raw.parse().map_err(|_| {
                CoreError::InvalidInput(format!("{} must be an integer, got {:?}", ENV_API_TIMEOUT_MS, raw))
            })?;
        }
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn is_dev(&self) -> bool {
        self.environment == Environment::Development
    }
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
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.environment, Environment::Production);
        assert_eq!(cfg.api.base_url, "");
        assert_eq!(cfg.api.effective_timeout_ms(), DEFAULT_API_TIMEOUT_MS);
        assert!(!cfg.is_dev());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            (ENV_ENVIRONMENT, "development"),
            (ENV_API_BASE_URL, "  https://api.example.test/v1  "),
            (ENV_API_TIMEOUT_MS, "500"),
        ]))
        .unwrap();
        assert!(cfg.is_dev());
        assert_eq!(cfg.api.base_url, "https://api.example.test/v1");
        assert_eq!(cfg.api.timeout_ms, 500);
    }

    #[test]
    fn zero_timeout_falls_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[(ENV_API_TIMEOUT_MS, "0")])).unwrap();
        assert_eq!(cfg.api.effective_timeout_ms(), FALLBACK_API_TIMEOUT_MS);
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_API_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
