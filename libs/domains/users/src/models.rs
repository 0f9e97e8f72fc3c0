use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{UserError, UserResult};

/// Lifecycle status of a user.
///
/// Rows written by other tools may carry a status this crate does not
/// know; those are kept verbatim in [`Status::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Inactive,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Other(raw) => raw,
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        match raw {
            "active" => Status::Active,
            "inactive" => Status::Inactive,
            other => Status::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User aggregate.
///
/// Fields are private: every change goes through a method that keeps
/// `email` and `name` non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    email: String,
    name: String,
    status: Status,
    created_at: DateTime<Utc>,
}

impl User {
    /// New active user with a fresh identifier.
    pub fn create(email: impl Into<String>, name: impl Into<String>) -> UserResult<Self> {
        let email = email.into();
        let name = name.into();
        if email.is_empty() || name.is_empty() {
            return Err(UserError::validation("email and name required"));
        }

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            email,
            name,
            status: Status::Active,
            created_at: Utc::now(),
        })
    }

    /// Rebuild a user from stored fields. The status is taken as stored.
    pub fn reconstruct(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        status: &str,
        created_at: DateTime<Utc>,
    ) -> UserResult<Self> {
        let id = id.into();
        let email = email.into();
        let name = name.into();
        if id.is_empty() || email.is_empty() || name.is_empty() {
            return Err(UserError::validation("id, email and name required"));
        }

        Ok(Self {
            id,
            email,
            name,
            status: Status::from(status),
            created_at,
        })
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> UserResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserError::validation("name required"));
        }
        self.name = name;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.status = Status::Active;
    }

    pub fn deactivate(&mut self) {
        self.status = Status::Inactive;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Read-only projection of a user shared with other modules and clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    #[schema(example = "active")]
    pub status: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            status: user.status.as_str().to_string(),
        }
    }
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            status: user.status.as_str().to_string(),
        }
    }
}
