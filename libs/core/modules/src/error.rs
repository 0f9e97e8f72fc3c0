use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("table '{table}' is claimed by both module '{first}' and module '{second}'")]
    DuplicateSchemaObject {
        table: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("failed to create table '{table}': {source}")]
    Migration {
        table: String,
        #[source]
        source: DbErr,
    },
}
