//! Versioned schema migrations, for deployments that prefer explicit
//! migrations over startup reconciliation by the module registry.
//!
//! Both paths create the same tables, so either can run first.

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_users::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use test_utils::TestDatabase;

    const INSERT: &str = "INSERT INTO users (id, email, name, status, created_at) \
                          VALUES ('u-1', 'a@x.io', 'Ann', 'active', 1700000000)";

    #[tokio::test]
    async fn test_up_creates_users_table() {
        let db = TestDatabase::in_memory().await;

        Migrator::up(&db.connection, None).await.unwrap();

        db.connection.execute_unprepared(INSERT).await.unwrap();
        let duplicate = INSERT.replace("'u-1'", "'u-2'");
        assert!(db.connection.execute_unprepared(&duplicate).await.is_err());
    }

    #[tokio::test]
    async fn test_down_then_up() {
        let db = TestDatabase::in_memory().await;

        Migrator::up(&db.connection, None).await.unwrap();
        Migrator::down(&db.connection, None).await.unwrap();
        assert!(db.connection.execute_unprepared(INSERT).await.is_err());

        Migrator::up(&db.connection, None).await.unwrap();
        db.connection.execute_unprepared(INSERT).await.unwrap();
    }
}
