use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extract the single path parameter of the route, rejecting a missing or
/// empty value with `missing_message`. Any other value, whitespace included,
/// is passed through as an opaque id.
///
/// Resource crates wrap this in their own extractor to give each id its own
/// message.
pub async fn non_empty_path_param<S>(
    parts: &mut Parts,
    state: &S,
    missing_message: &str,
) -> Result<String, AppError>
where
    S: Send + Sync,
{
    let value = Path::<String>::from_request_parts(parts, state)
        .await
        .map(|Path(value)| value)
        .unwrap_or_default();

    if value.is_empty() {
        return Err(AppError::MissingParameter(missing_message.to_string()));
    }
    Ok(value)
}
