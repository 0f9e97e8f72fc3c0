use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{DbBackend, EntityName, EntityTrait, Schema};

/// A table owned by a module, described by its SeaORM entity.
///
/// The statement is rendered for the backend of the connection being
/// migrated, so the same descriptor serves PostgreSQL and SQLite.
#[derive(Clone)]
pub struct SchemaObject {
    table: &'static str,
    build: fn(DbBackend) -> TableCreateStatement,
}

impl SchemaObject {
    pub fn of<E>() -> Self
    where
        E: EntityTrait + Default,
    {
        Self {
            table: E::default().table_name(),
            build: create_table_for::<E>,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// `CREATE TABLE IF NOT EXISTS` for `backend`.
    pub fn create_statement(&self, backend: DbBackend) -> TableCreateStatement {
        let mut statement = (self.build)(backend);
        statement.if_not_exists();
        statement
    }
}

impl std::fmt::Debug for SchemaObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaObject").field("table", &self.table).finish()
    }
}

fn create_table_for<E>(backend: DbBackend) -> TableCreateStatement
where
    E: EntityTrait + Default,
{
    Schema::new(backend).create_table_from_entity(E::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::PostgresQueryBuilder;

    mod widget {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "widgets")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: String,
            #[sea_orm(unique)]
            pub label: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    #[test]
    fn test_schema_object_names_table() {
        let object = SchemaObject::of::<widget::Entity>();
        assert_eq!(object.table(), "widgets");
    }

    #[test]
    fn test_create_statement_is_idempotent_sql() {
        let object = SchemaObject::of::<widget::Entity>();
        let sql = object
            .create_statement(DbBackend::Postgres)
            .to_string(PostgresQueryBuilder);

        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"widgets\""), "{sql}");
        assert!(sql.contains("UNIQUE"), "{sql}");
    }
}
