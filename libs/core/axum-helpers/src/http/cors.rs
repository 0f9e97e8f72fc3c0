use axum::http::{HeaderName, HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Build the CORS layer from configuration.
///
/// An empty origin list allows any origin without credentials; an explicit
/// list allows credentials.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(config.max_age);

    if config.allow_any_origin() {
        return Ok(layer
            .allow_origin(Any)
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, API_KEY_HEADER]));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGINS value: {}", e),
            )
        })?;

    tracing::info!(origins = ?config.allowed_origins, "CORS restricted to configured origins");

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            API_KEY_HEADER,
        ])
        .allow_credentials(true))
}
