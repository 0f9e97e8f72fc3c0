//! Module composition for the monolith.
//!
//! A feature module owns its domain, persistence and HTTP slice. The host
//! process hands every module the same [`ModuleContext`], collects the
//! [`SchemaObject`]s they own, reconciles the schema once and mounts every
//! module's routes under one API prefix:
//!
//! ```ignore
//! let registry = ModuleRegistry::setup(&ctx, vec![
//!     ModuleSetup::new(UserModule::new),
//! ]);
//! registry.migrate(&ctx.db).await?;
//! let api = registry.mount("/api/v1");
//! ```
//!
//! Modules never discover each other. When one module needs another's query
//! service, the caller builds the provider first and passes the handle into
//! the consumer's constructor.

mod context;
mod error;
mod module;
mod registry;
mod schema;

pub use context::ModuleContext;
pub use error::ModuleError;
pub use module::{Module, ModuleSetup};
pub use registry::ModuleRegistry;
pub use schema::SchemaObject;
