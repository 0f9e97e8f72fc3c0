//! Inputs to [`UserService`](crate::UserService) operations.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUserCommand {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateUserCommand {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeactivateUserCommand {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserQuery {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserByEmailQuery {
    pub email: String,
}

/// One page of users. `page` is 1-based; `page >= 1` and `limit >= 1` are
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersQuery {
    pub page: u64,
    pub limit: u64,
}

impl ListUsersQuery {
    /// Number of rows to skip, or `None` when the page starts past any row
    /// storage can address (beyond `i64::MAX`). Such a page is always empty.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .saturating_sub(1)
            .checked_mul(self.limit)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}
