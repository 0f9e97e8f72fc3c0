use crate::{env_or_default, env_required, ConfigError, FromEnv};

pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Shared secret checked by the API-key middleware.
#[derive(Clone)]
pub struct ApiKeyConfig {
    pub header: String,
    key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            header: DEFAULT_API_KEY_HEADER.to_string(),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("header", &self.header)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    /// - API_KEY: required, must not be blank
    /// - API_KEY_HEADER: defaults to X-API-Key
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required("API_KEY")?;
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            header: env_or_default("API_KEY_HEADER", DEFAULT_API_KEY_HEADER),
            key,
        })
    }
}
