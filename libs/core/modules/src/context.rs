use core_config::api_key::ApiKeyConfig;
use sea_orm::DatabaseConnection;

/// Shared resources handed to every module constructor.
///
/// Built once in `main`; there is no process-global equivalent.
#[derive(Clone, Debug)]
pub struct ModuleContext {
    /// Pooled handle, safe to clone into every repository
    pub db: DatabaseConnection,
    pub api_key: ApiKeyConfig,
}

impl ModuleContext {
    pub fn new(db: DatabaseConnection, api_key: ApiKeyConfig) -> Self {
        Self { db, api_key }
    }
}
