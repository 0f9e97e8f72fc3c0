//! HTTP middleware: API-key authentication, CORS and security headers.

pub mod api_key;
pub mod cors;
pub mod security;

pub use api_key::{Authenticated, optional_api_key, require_api_key};
pub use cors::create_cors_layer;
pub use security::security_headers;
