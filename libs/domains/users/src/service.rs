use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::{
    ActivateUserCommand, CreateUserCommand, DeactivateUserCommand, DeleteUserCommand,
    GetUserByEmailQuery, GetUserQuery, ListUsersQuery, UpdateUserCommand,
};
use crate::error::{UserError, UserResult};
use crate::models::{User, UserInfo};
use crate::query::UserQueryService;
use crate::repository::UserRepository;

/// User use cases on top of a [`UserRepository`].
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user.
    ///
    /// The email pre-check is advisory: only a successful lookup blocks the
    /// insert. A concurrent insert with the same email is stopped by the
    /// storage uniqueness constraint.
    pub async fn create_user(&self, command: CreateUserCommand) -> UserResult<UserInfo> {
        match self.repository.find_by_email(&command.email).await {
            Ok(_) => return Err(UserError::DuplicateEmail),
            Err(UserError::NotFound) => {}
            Err(e) => {
                tracing::warn!(email = %command.email, error = %e, "email pre-check failed, continuing with insert");
            }
        }

        let user = User::create(command.email, command.name)?;
        self.repository.save(&user).await?;

        tracing::info!(user_id = %user.id(), "user created");
        Ok(user.into())
    }

    pub async fn get_user(&self, query: GetUserQuery) -> UserResult<UserInfo> {
        let user = self.repository.find_by_id(&query.id).await?;
        Ok(user.into())
    }

    pub async fn get_user_by_email(&self, query: GetUserByEmailQuery) -> UserResult<UserInfo> {
        let user = self.repository.find_by_email(&query.email).await?;
        Ok(user.into())
    }

    pub async fn update_user(&self, command: UpdateUserCommand) -> UserResult<UserInfo> {
        let mut user = self.repository.find_by_id(&command.id).await?;
        user.update_name(command.name)?;
        self.repository.save(&user).await?;

        tracing::info!(user_id = %user.id(), "user updated");
        Ok(user.into())
    }

    pub async fn delete_user(&self, command: DeleteUserCommand) -> UserResult<()> {
        self.repository.delete(&command.id).await?;

        tracing::info!(user_id = %command.id, "user deleted");
        Ok(())
    }

    pub async fn activate_user(&self, command: ActivateUserCommand) -> UserResult<UserInfo> {
        let mut user = self.repository.find_by_id(&command.id).await?;
        user.activate();
        self.repository.save(&user).await?;

        tracing::info!(user_id = %user.id(), "user activated");
        Ok(user.into())
    }

    pub async fn deactivate_user(&self, command: DeactivateUserCommand) -> UserResult<UserInfo> {
        let mut user = self.repository.find_by_id(&command.id).await?;
        user.deactivate();
        self.repository.save(&user).await?;

        tracing::info!(user_id = %user.id(), "user deactivated");
        Ok(user.into())
    }

    pub async fn list_users(&self, query: ListUsersQuery) -> UserResult<Vec<UserInfo>> {
        tracing::debug!(page = query.page, limit = query.limit, "listing users");
        let users = self.repository.find_all(query.page, query.limit).await?;
        Ok(users.into_iter().map(UserInfo::from).collect())
    }
}

#[async_trait]
impl<R: UserRepository> UserQueryService for UserService<R> {
    async fn get_user_info(&self, id: &str) -> UserResult<UserInfo> {
        self.get_user(GetUserQuery { id: id.to_string() }).await
    }

    async fn get_user_by_email(&self, email: &str) -> UserResult<UserInfo> {
        UserService::get_user_by_email(
            self,
            GetUserByEmailQuery {
                email: email.to_string(),
            },
        )
        .await
    }
}
