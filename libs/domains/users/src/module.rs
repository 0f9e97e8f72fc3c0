use axum::Router;
use core_config::api_key::ApiKeyConfig;
use core_modules::{Module, ModuleContext, SchemaObject};
use std::sync::Arc;

use crate::entity;
use crate::handlers;
use crate::postgres::PgUserRepository;
use crate::query::UserQueryService;
use crate::service::UserService;

/// The users feature: persistence, service and HTTP routes under `/users`.
pub struct UserModule {
    service: UserService<PgUserRepository>,
    api_key: ApiKeyConfig,
}

impl UserModule {
    pub const NAME: &'static str = "users";

    pub fn new(ctx: &ModuleContext) -> Self {
        let repository = PgUserRepository::new(ctx.db.clone());

        Self {
            service: UserService::new(repository),
            api_key: ctx.api_key.clone(),
        }
    }

    /// Read-only view for other modules. Shares state with the routes.
    pub fn query_service(&self) -> Arc<dyn UserQueryService> {
        Arc::new(self.service.clone())
    }
}

impl Module for UserModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register_routes(&self, group: Router) -> Router {
        group.nest(
            "/users",
            handlers::router(self.service.clone(), self.api_key.clone()),
        )
    }

    fn schema_objects(&self) -> Vec<SchemaObject> {
        vec![SchemaObject::of::<entity::Entity>()]
    }
}
