use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use core_config::api_key::ApiKeyConfig;

/// Request extension set by [`optional_api_key`] when a valid key was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated(pub bool);

enum Presented {
    Absent,
    Valid,
    Invalid,
}

fn check(config: &ApiKeyConfig, headers: &HeaderMap) -> Presented {
    let Some(value) = headers.get(config.header.as_str()) else {
        return Presented::Absent;
    };
    if value.is_empty() {
        return Presented::Absent;
    }
    if constant_time_eq(value.as_bytes(), config.key().as_bytes()) {
        Presented::Valid
    } else {
        Presented::Invalid
    }
}

// Length still leaks; the content does not.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Reject the request unless it carries the configured API key.
///
/// ```ignore
/// let protected = Router::new()
///     .route("/", post(create))
///     .route_layer(middleware::from_fn_with_state(api_key.clone(), require_api_key));
/// ```
pub async fn require_api_key(
    State(config): State<ApiKeyConfig>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match check(&config, &headers) {
        Presented::Valid => {
            tracing::debug!("API key validated");
            Ok(next.run(request).await)
        }
        Presented::Absent => {
            tracing::warn!(path = %request.uri().path(), "API key missing");
            Err(AppError::MissingApiKey)
        }
        Presented::Invalid => {
            tracing::warn!(path = %request.uri().path(), "invalid API key provided");
            Err(AppError::InvalidApiKey)
        }
    }
}

/// Accept anonymous requests, but reject a key that is present and wrong.
///
/// Inserts [`Authenticated`] into the request extensions.
pub async fn optional_api_key(
    State(config): State<ApiKeyConfig>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authenticated = match check(&config, &headers) {
        Presented::Valid => true,
        Presented::Absent => false,
        Presented::Invalid => {
            tracing::warn!(path = %request.uri().path(), "invalid optional API key provided");
            return Err(AppError::InvalidApiKey);
        }
    };

    request.extensions_mut().insert(Authenticated(authenticated));
    Ok(next.run(request).await)
}
