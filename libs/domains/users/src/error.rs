use thiserror::Error;

/// User domain errors.
///
/// The display strings are part of the HTTP contract: several endpoints
/// echo them back as the error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("user not found")]
    NotFound,

    #[error("user with this email already exists")]
    DuplicateEmail,

    #[error("{0}")]
    Persistence(String),

    #[error("operation cancelled")]
    Cancelled,
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(_) => UserError::NotFound,
            // Pool acquisition gave up before the deadline: the caller stops waiting.
            sea_orm::DbErr::ConnectionAcquire(_) => UserError::Cancelled,
            other => UserError::Persistence(format!("Database error: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_display_messages() {
        assert_eq!(UserError::NotFound.to_string(), "user not found");
        assert_eq!(
            UserError::DuplicateEmail.to_string(),
            "user with this email already exists"
        );
        assert_eq!(
            UserError::validation("name required").to_string(),
            "name required"
        );
    }

    #[test]
    fn test_db_error_mapping() {
        assert_eq!(
            UserError::from(DbErr::RecordNotFound("users".into())),
            UserError::NotFound
        );
        assert_eq!(
            UserError::from(DbErr::ConnectionAcquire(
                sea_orm::error::ConnAcquireErr::Timeout
            )),
            UserError::Cancelled
        );
        assert!(matches!(
            UserError::from(DbErr::Custom("boom".into())),
            UserError::Persistence(msg) if msg.contains("boom")
        ));
    }
}
