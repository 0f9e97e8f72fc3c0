//! Relational storage plumbing shared by every module.
//!
//! The process opens one pooled [`DatabaseConnection`](sea_orm::DatabaseConnection)
//! at startup and hands it to the module registry; modules never open
//! connections of their own.
//!
//! # Features
//!
//! - `config` (default) - load [`postgres::PostgresConfig`] through `core_config::FromEnv`
//!
//! ```ignore
//! use database::postgres::{connect_with_retry, PostgresConfig};
//! use database::common::RetryConfig;
//!
//! let db = connect_with_retry(PostgresConfig::from_env()?, RetryConfig::default()).await?;
//! database::postgres::check_health(&db).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
