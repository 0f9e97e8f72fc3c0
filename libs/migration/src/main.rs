//! `migration up | down | status | fresh | refresh | reset`, reading
//! `DATABASE_URL` from the environment.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
