use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{info, instrument};

use super::PostgresConfig;
use crate::common::{DatabaseError, RetryConfig, retry_with_backoff};

/// Open a pooled connection with the given options.
pub async fn connect(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "database connection established");
    Ok(db)
}

/// Connect with exponential backoff, for databases that start alongside the service.
#[instrument(skip_all, fields(max_retries = retry.max_retries))]
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry: RetryConfig,
) -> Result<DatabaseConnection, DatabaseError> {
    let options = config.into_connect_options();

    retry_with_backoff(|| connect(options.clone()), &retry)
        .await
        .map_err(|(source, attempts)| DatabaseError::ConnectionFailed { attempts, source })
}

/// Apply every pending versioned migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    info!("running versioned migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("versioned migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_connect_with_retry_reports_attempts() {
        let config = PostgresConfig {
            connect_timeout: Duration::from_millis(50),
            acquire_timeout: Duration::from_millis(50),
            ..PostgresConfig::new("not-a-database-url")
        };
        let retry = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(Duration::from_millis(1))
            .without_jitter();

        let err = connect_with_retry(config, retry).await.unwrap_err();

        assert!(matches!(err, DatabaseError::ConnectionFailed { attempts: 2, .. }));
    }
}
