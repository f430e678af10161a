//! Database access for the premiere signup store.
//!
//! Pool construction, migrations, the `submissions` row model, and the
//! [`SubmissionRepo`](repositories::SubmissionRepo) repository.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use repositories::SubmissionRepo;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
