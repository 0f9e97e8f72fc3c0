//! Assembly of the HTTP application from the module registry.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, create_router, health_router, run_health_checks};
use core_config::{cors::CorsConfig, server::ServerConfig};
use core_modules::ModuleRegistry;
use sea_orm::DatabaseConnection;
use std::io;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Monolith API",
    description = "Modular monolith: every feature module is mounted under the API prefix."
))]
struct RootDoc;

/// OpenAPI document with each module's paths placed under the configured prefix.
pub fn openapi(api_prefix: &str) -> utoipa::openapi::OpenApi {
    RootDoc::openapi().nest(format!("{api_prefix}/users"), domain_users::ApiDoc::openapi())
}

/// `GET /health-check/ready`: 200 when the database answers, 503 otherwise.
async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await.into_response()
}

fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/health-check/ready", get(ready_handler))
        .with_state(db)
}

fn docs_router(api_prefix: &str) -> Router {
    let doc = openapi(api_prefix);
    Router::new().route(
        "/api-docs/openapi.json",
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    )
}

/// Module routes under the API prefix, plus health probes and docs outside it,
/// wrapped in the shared middleware stack.
pub fn build_app(
    registry: &ModuleRegistry,
    db: DatabaseConnection,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> io::Result<Router> {
    let routes = registry
        .mount(&server.api_prefix)
        .merge(health_router())
        .merge(ready_router(db))
        .merge(docs_router(&server.api_prefix));

    create_router(routes, cors, server.request_timeout)
}
