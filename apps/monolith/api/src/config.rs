use core_config::{
    AppInfo, ConfigError, Environment, FromEnv, api_key::ApiKeyConfig, app_info, cors::CorsConfig,
    env_parse_or, server::ServerConfig,
};
use database::postgres::PostgresConfig;

/// Everything the process reads from the environment, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub api_key: ApiKeyConfig,
    pub cors: CorsConfig,
    /// `DB_RUN_MIGRATIONS`: apply versioned migrations before the registry
    /// reconciles module tables.
    pub run_versioned_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?, // DATABASE_URL is required
            api_key: ApiKeyConfig::from_env()?,   // API_KEY is required
            cors: CorsConfig::from_env()?,
            run_versioned_migrations: env_parse_or("DB_RUN_MIGRATIONS", false)?,
        })
    }
}
