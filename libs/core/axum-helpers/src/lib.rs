//! # Axum Helpers
//!
//! HTTP plumbing shared by every module and the host binary.
//!
//! - **[`errors`]**: `AppError` and the JSON error body
//! - **[`extractors`]**: body and path extractors that reject with `AppError`
//! - **[`http`]**: API-key authentication, CORS, security headers
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{JsonBody, non_empty_path_param};
pub use http::{Authenticated, optional_api_key, require_api_key};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
