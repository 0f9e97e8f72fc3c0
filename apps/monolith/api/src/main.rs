use core_config::tracing::{init_tracing, install_color_eyre};
use core_modules::{ModuleContext, ModuleRegistry, ModuleSetup};
use database::common::RetryConfig;
use domain_users::UserModule;
use std::time::Duration;
use tracing::info;

mod app;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    info!(app = config.app.name, version = config.app.version, "starting");

    let db = database::postgres::connect_with_retry(config.database.clone(), RetryConfig::default())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_versioned_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db).await?;
    }

    let ctx = ModuleContext::new(db.clone(), config.api_key.clone());
    let registry = ModuleRegistry::setup(&ctx, vec![ModuleSetup::new(UserModule::new)]);
    registry.migrate(&db).await?;

    let app = app::build_app(&registry, db.clone(), &config.server, &config.cors)?;

    create_server(app, &config, db).await?;

    info!("shutdown complete");
    Ok(())
}

async fn create_server(
    app: axum::Router,
    config: &Config,
    db: sea_orm::DatabaseConnection,
) -> eyre::Result<()> {
    axum_helpers::create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("closing database connections");
        match db.close().await {
            Ok(()) => info!("database connection closed"),
            Err(e) => tracing::error!(error = %e, "error closing database"),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))
}
