//! Server infrastructure: router assembly, liveness/readiness endpoints and
//! graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_router, create_production_app, health_router};
//!
//! let router = create_router(registry.mount(&server.api_prefix), &cors, server.request_timeout)?
//!     .merge(health_router());
//! create_production_app(router, &server, Duration::from_secs(10), async move {
//!     db.close().await.ok();
//! })
//! .await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, alive_handler, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
