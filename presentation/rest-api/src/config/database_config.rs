use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::env::{parse_or, process_env, string_or};

/// Initialize database connection pool from environment variables and
/// apply pending migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory with SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = parse_or(&process_env, "DATABASE_MAX_CONNECTIONS", 5u32);
    let migrations_path = string_or(&process_env, "MIGRATIONS_PATH", "./migrations");

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;
    Ok(pool)
}
