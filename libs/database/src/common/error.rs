/// Errors raised while opening, probing or migrating the database.
///
/// Query failures inside a module are mapped to that module's own error type
/// instead of this one.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    /// Connection could not be established within the retry budget
    #[error("Connection failed after {attempts} attempts: {source}")]
    ConnectionFailed {
        attempts: u32,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
