//! Users domain module.
//!
//! Layered the same way as every feature module:
//!
//! - `models`: the [`User`] aggregate and its [`UserInfo`] projection
//! - `repository`: the [`UserRepository`] port and an in-memory adapter
//! - `entity` / `postgres`: the SeaORM row and the database adapter
//! - `service`: use cases, one method per command or query
//! - `handlers` / `dto`: the HTTP adapter
//! - `module`: wiring into the [`core_modules`] registry
//!
//! Other modules read users through [`UserQueryService`], obtained from
//! [`UserModule::query_service`].

pub mod commands;
pub mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod module;
pub mod postgres;
pub mod query;
pub mod repository;
pub mod service;

pub use commands::{
    ActivateUserCommand, CreateUserCommand, DeactivateUserCommand, DeleteUserCommand,
    GetUserByEmailQuery, GetUserQuery, ListUsersQuery, UpdateUserCommand,
};
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, router};
pub use models::{Status, User, UserInfo};
pub use module::UserModule;
pub use postgres::PgUserRepository;
pub use query::UserQueryService;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
