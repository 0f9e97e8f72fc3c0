use axum::{
    Json, Router,
    extract::{FromRequestParts, Query, State, rejection::QueryRejection},
    http::{StatusCode, request::Parts},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AppError, JsonBody,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    extractors::path_param::non_empty_path_param,
    optional_api_key, require_api_key,
};
use core_config::api_key::ApiKeyConfig;
use std::sync::Arc;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::commands::{
    ActivateUserCommand, CreateUserCommand, DeactivateUserCommand, DeleteUserCommand,
    GetUserQuery, ListUsersQuery, UpdateUserCommand,
};
use crate::dto::{CreateUserRequest, ListParams, UpdateUserRequest, UserResponse, UsersResponse};
use crate::error::UserError;
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// Registers the `api_key` header scheme referenced by the write endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                core_config::api_key::DEFAULT_API_KEY_HEADER,
                "Shared API key; required for writes, optional for reads.",
            ))),
        );
    }
}

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        create_user,
        get_user,
        update_user,
        delete_user,
        activate_user,
        deactivate_user,
        list_users,
    ),
    components(
        schemas(CreateUserRequest, UpdateUserRequest, UserResponse, UsersResponse),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// User routes, relative to the group the module is mounted under.
///
/// Writes require the API key; reads accept it optionally.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, api_key: ApiKeyConfig) -> Router {
    let shared_service = Arc::new(service);

    let protected = Router::new()
        .route("/", post(create_user))
        .route("/{id}", put(update_user).delete(delete_user))
        .route("/{id}/activate", put(activate_user))
        .route("/{id}/deactivate", put(deactivate_user))
        .route_layer(middleware::from_fn_with_state(
            api_key.clone(),
            require_api_key,
        ))
        .with_state(shared_service.clone());

    let public = Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user))
        .route_layer(middleware::from_fn_with_state(api_key, optional_api_key))
        .with_state(shared_service);

    protected.merge(public)
}

/// User id from the path; a missing or empty id is rejected with 400.
pub struct UserIdPath(pub String);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        non_empty_path_param(parts, state, "User ID is required")
            .await
            .map(UserIdPath)
    }
}

// Status mapping is per endpoint and deliberately uneven; clients rely on it.
// Writes with a body report service errors as 400, single reads as 404 and
// the remaining commands as 500.

fn client_error(err: UserError) -> AppError {
    AppError::BadRequest(err.to_string())
}

fn server_error(err: UserError) -> AppError {
    AppError::InternalServerError(err.to_string())
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUserRequest,
    security(("api_key" = [])),
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = service
        .create_user(CreateUserCommand {
            email: body.email,
            name: body.name,
        })
        .await
        .map_err(client_error)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserResponse>, AppError> {
    let user = service.get_user(GetUserQuery { id }).await.map_err(|err| {
        tracing::debug!(error = %err, "user lookup failed");
        AppError::NotFound("User not found".to_string())
    })?;

    Ok(Json(user.into()))
}

/// Rename a user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = service
        .update_user(UpdateUserCommand {
            id,
            name: body.name,
        })
        .await
        .map_err(client_error)?;

    Ok(Json(user.into()))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode, AppError> {
    service
        .delete_user(DeleteUserCommand { id })
        .await
        .map_err(server_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Activate a user
#[utoipa::path(
    put,
    path = "/{id}/activate",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "User activated", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn activate_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserResponse>, AppError> {
    let user = service
        .activate_user(ActivateUserCommand { id })
        .await
        .map_err(server_error)?;

    Ok(Json(user.into()))
}

/// Deactivate a user
#[utoipa::path(
    put,
    path = "/{id}/deactivate",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "User deactivated", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn deactivate_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserResponse>, AppError> {
    let user = service
        .deactivate_user(DeactivateUserCommand { id })
        .await
        .map_err(server_error)?;

    Ok(Json(user.into()))
}

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of users", body = UsersResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<UsersResponse>, AppError> {
    // Decoded as raw pairs so repeated or odd keys never reject the request.
    let params = query
        .map(|Query(pairs)| ListParams::from_pairs(pairs))
        .unwrap_or_default();
    let (page, limit) = (params.page(), params.limit());

    let users: Vec<UserResponse> = service
        .list_users(ListUsersQuery { page, limit })
        .await
        .map_err(server_error)?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(UsersResponse {
        total: users.len() as u64,
        users,
        page,
        limit,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc = ApiDoc::openapi();

        for path in ["", "/{id}", "/{id}/activate", "/{id}/deactivate"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path:?}");
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_key"));
        assert!(components.schemas.contains_key("UsersResponse"));
    }
}
