use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::UserInfo;

/// Read-only user lookups offered to other modules.
///
/// Obtained from [`UserModule::query_service`](crate::UserModule::query_service).
#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn get_user_info(&self, id: &str) -> UserResult<UserInfo>;

    async fn get_user_by_email(&self, email: &str) -> UserResult<UserInfo>;
}
