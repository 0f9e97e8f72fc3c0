use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::UserInfo;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Body of `POST /users`. Missing fields read as empty and are rejected by
/// domain validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name: String,
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[schema(example = "Anna")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[schema(example = "active")]
    pub status: String,
}

impl From<UserInfo> for UserResponse {
    fn from(info: UserInfo) -> Self {
        Self {
            id: info.id,
            email: info.email,
            name: info.name,
            status: info.status,
        }
    }
}

/// One page of users. `total` counts the users in this page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

/// Raw pagination parameters. Kept as text so that malformed values fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page, defaults to 1
    pub page: Option<String>,
    /// Page size in 1..=100, defaults to 10
    pub limit: Option<String>,
}

impl ListParams {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .map_or(DEFAULT_PAGE, |page| page as u64)
    }

    pub fn limit(&self) -> u64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| (1..=MAX_LIMIT as i64).contains(limit))
            .map_or(DEFAULT_LIMIT, |limit| limit as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> ListParams {
        ListParams {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let p = params(None, None);
        assert_eq!((p.page(), p.limit()), (1, 10));
    }

    #[test]
    fn test_invalid_values_reset() {
        for (page, limit) in [("0", "0"), ("-3", "101"), ("abc", "ten"), ("", "")] {
            let p = params(Some(page), Some(limit));
            assert_eq!((p.page(), p.limit()), (1, 10), "page={page} limit={limit}");
        }
    }

    #[test]
    fn test_valid_values_kept() {
        let p = params(Some("3"), Some("100"));
        assert_eq!((p.page(), p.limit()), (3, 100));

        let p = params(Some("1"), Some("1"));
        assert_eq!((p.page(), p.limit()), (1, 1));
    }

    #[test]
    fn test_first_repeated_value_wins() {
        let pairs = [("page", "2"), ("limit", "abc"), ("page", "7"), ("limit", "5"), ("sort", "x")]
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let p = ListParams::from_pairs(pairs);
        assert_eq!(p.page.as_deref(), Some("2"));
        assert_eq!(p.limit.as_deref(), Some("abc"));
        assert_eq!((p.page(), p.limit()), (2, 10));
    }

    #[test]
    fn test_missing_body_fields_default_to_empty() {
        let body: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(body.email.is_empty() && body.name.is_empty());
    }
}
