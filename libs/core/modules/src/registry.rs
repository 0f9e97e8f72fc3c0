use axum::Router;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use sea_orm_migration::SchemaManager;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

use crate::{Module, ModuleContext, ModuleError, ModuleSetup, SchemaObject};

/// The set of modules composing one process.
pub struct ModuleRegistry {
    modules: Vec<Box<dyn Module>>,
}

impl ModuleRegistry {
    /// Run every constructor in list order against the shared context.
    pub fn setup(ctx: &ModuleContext, setups: Vec<ModuleSetup>) -> Self {
        let modules: Vec<Box<dyn Module>> = setups
            .into_iter()
            .map(|setup| {
                let module = setup.build(ctx);
                info!(module = module.name(), "module initialized");
                module
            })
            .collect();

        Self { modules }
    }

    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// Union of every module's schema objects, in module order.
    pub fn schema_objects(&self) -> Vec<SchemaObject> {
        self.modules.iter().flat_map(|m| m.schema_objects()).collect()
    }

    /// Create every owned table that does not exist yet.
    ///
    /// Fails before touching the database when two modules claim the same table.
    #[instrument(skip_all)]
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<(), ModuleError> {
        let mut owners: HashMap<&'static str, &'static str> = HashMap::new();
        let mut objects = Vec::new();

        for module in &self.modules {
            for object in module.schema_objects() {
                if let Some(first) = owners.insert(object.table(), module.name()) {
                    return Err(ModuleError::DuplicateSchemaObject {
                        table: object.table().to_string(),
                        first,
                        second: module.name(),
                    });
                }
                objects.push(object);
            }
        }

        let backend = db.get_database_backend();
        let manager = SchemaManager::new(db);

        for object in &objects {
            debug!(table = object.table(), "reconciling table");
            manager
                .create_table(object.create_statement(backend))
                .await
                .map_err(|source| ModuleError::Migration {
                    table: object.table().to_string(),
                    source,
                })?;
        }

        info!(tables = objects.len(), "schema reconciled");
        Ok(())
    }

    /// Every module's routes folded into one group, without a prefix.
    pub fn routes(&self) -> Router {
        self.modules
            .iter()
            .fold(Router::new(), |group, module| module.register_routes(group))
    }

    /// [`routes`](Self::routes) nested under `prefix`. A blank or `/` prefix
    /// mounts at the root.
    pub fn mount(&self, prefix: &str) -> Router {
        let prefix = prefix.trim().trim_end_matches('/');
        let routes = self.routes();

        if prefix.is_empty() {
            info!(modules = ?self.module_names(), "modules mounted at root");
            return routes;
        }

        let prefix = if prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{prefix}")
        };
        info!(prefix = %prefix, modules = ?self.module_names(), "modules mounted");
        Router::new().nest(&prefix, routes)
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.module_names())
            .finish()
    }
}
