use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// `users` table. `created_at` is whole unix seconds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for User {
    type Error = UserError;

    fn try_from(model: Model) -> UserResult<Self> {
        let created_at = chrono::DateTime::from_timestamp(model.created_at, 0).ok_or_else(|| {
            UserError::Persistence(format!(
                "created_at out of range for user {}: {}",
                model.id, model.created_at
            ))
        })?;

        User::reconstruct(model.id, model.email, model.name, &model.status, created_at)
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id().to_string()),
            email: Set(user.email().to_string()),
            name: Set(user.name().to_string()),
            status: Set(user.status().as_str().to_string()),
            created_at: Set(user.created_at().timestamp()),
        }
    }
}
