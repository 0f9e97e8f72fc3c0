use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::commands::ListUsersQuery;
use crate::error::{UserError, UserResult};
use crate::models::User;

/// Storage port for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert, or overwrite every field of the user with the same id.
    async fn save(&self, user: &User) -> UserResult<()>;

    async fn find_by_id(&self, id: &str) -> UserResult<User>;

    async fn find_by_email(&self, email: &str) -> UserResult<User>;

    /// Page `page` (1-based) of at most `limit` users, in storage order.
    async fn find_all(&self, page: u64, limit: u64) -> UserResult<Vec<User>>;

    /// Fails with [`UserError::NotFound`] when nothing was removed.
    async fn delete(&self, id: &str) -> UserResult<()>;
}

/// In-memory implementation for tests and local runs.
///
/// Users are kept in insertion order so pagination is stable. Email
/// uniqueness is enforced the way the relational store does it.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.email() == user.email() && u.id() != user.id())
        {
            return Err(UserError::Persistence(format!(
                "unique constraint violated: users.email = {}",
                user.email()
            )));
        }

        match users.iter_mut().find(|u| u.id() == user.id()) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    async fn find_all(&self, page: u64, limit: u64) -> UserResult<Vec<User>> {
        let Some(offset) = ListUsersQuery { page, limit }.offset() else {
            return Ok(Vec::new());
        };
        let users = self.users.read().await;

        Ok(users
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id() != id);

        if users.len() == before {
            return Err(UserError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = User::create("a@x.io", "Ann").unwrap();

        repo.save(&user).await.unwrap();

        assert_eq!(repo.find_by_id(user.id()).await.unwrap(), user);
        assert_eq!(repo.find_by_email("a@x.io").await.unwrap(), user);
        assert_eq!(
            repo.find_by_email("b@x.io").await.unwrap_err(),
            UserError::NotFound
        );
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = InMemoryUserRepository::new();
        let mut user = User::create("a@x.io", "Ann").unwrap();
        repo.save(&user).await.unwrap();

        user.update_name("Anna").unwrap();
        user.deactivate();
        repo.save(&user).await.unwrap();

        let stored = repo.find_by_id(user.id()).await.unwrap();
        assert_eq!(stored.name(), "Anna");
        assert_eq!(stored.status().as_str(), "inactive");
        assert_eq!(repo.find_all(1, 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_email_is_unique() {
        let repo = InMemoryUserRepository::new();
        repo.save(&User::create("a@x.io", "Ann").unwrap())
            .await
            .unwrap();

        let err = repo
            .save(&User::create("a@x.io", "Other").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_find_all_pages() {
        let repo = InMemoryUserRepository::new();
        for i in 0..15 {
            repo.save(&User::create(format!("u{i}@x.io"), "U").unwrap())
                .await
                .unwrap();
        }

        let first = repo.find_all(1, 5).await.unwrap();
        let third = repo.find_all(3, 5).await.unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].email(), "u0@x.io");
        assert_eq!(third.len(), 5);
        assert_eq!(third[4].email(), "u14@x.io");
        assert!(repo.find_all(4, 5).await.unwrap().is_empty());
        assert!(
            repo.find_all(1_000_000_000_000_000_000, 10)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let user = User::create("a@x.io", "Ann").unwrap();
        repo.save(&user).await.unwrap();

        repo.delete(user.id()).await.unwrap();
        assert_eq!(repo.delete(user.id()).await.unwrap_err(), UserError::NotFound);
    }
}
