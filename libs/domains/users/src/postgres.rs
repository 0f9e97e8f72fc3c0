use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};

use crate::commands::ListUsersQuery;
use crate::entity::{self, Column, Entity};
use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// SeaORM-backed user repository.
///
/// Written against [`DatabaseConnection`], so it runs on PostgreSQL in
/// production and on SQLite in tests.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: &User) -> UserResult<()> {
        let active = entity::ActiveModel::from(user);

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Email, Column::Name, Column::Status, Column::CreatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        tracing::debug!(user_id = %user.id(), "user saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> UserResult<User> {
        Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound)?
            .try_into()
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound)?
            .try_into()
    }

    async fn find_all(&self, page: u64, limit: u64) -> UserResult<Vec<User>> {
        let Some(offset) = ListUsersQuery { page, limit }.offset() else {
            return Ok(Vec::new());
        };
        let limit = limit.min(i64::MAX as u64);

        Entity::find()
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        let result = Entity::delete_by_id(id.to_string()).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound);
        }

        tracing::debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
