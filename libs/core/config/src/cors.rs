use crate::{env_parse_or, ConfigError, FromEnv};
use std::env;
use std::time::Duration;

/// Cross-origin settings for browser clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
    pub max_age: Duration,
}

impl CorsConfig {
    pub fn allow_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age: Duration::from_secs(12 * 60 * 60),
        }
    }
}

impl FromEnv for CorsConfig {
    /// - CORS_ALLOWED_ORIGINS: comma separated, unset or `*` allows any origin
    /// - CORS_MAX_AGE_SECS: defaults to 43200
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) if raw.trim() != "*" => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        };
        let max_age = Duration::from_secs(env_parse_or("CORS_MAX_AGE_SECS", 43_200u64)?);

        Ok(Self {
            allowed_origins,
            max_age,
        })
    }
}
