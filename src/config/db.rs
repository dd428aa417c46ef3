// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and manage the PostgreSQL connection pool

use crate::config::StorageConfig;
use crate::errors::StorageError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Creates connection pool with optimal settings
/// Called once during application startup; the returned pool is shared
/// by every repository in this crate.
pub async fn init_db_pool(config: &StorageConfig) -> Result<PgPool, StorageError> {
    log::info!("Initializing database pool: {}", config.database_url);

    let pool = PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// Run all pending migrations embedded from the migrations/ directory
/// DOCUMENTATION: Creates and upgrades the social-auth tables
/// (accounts, nonces, associations, codes, partials)
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    log::info!("Running social-auth storage migrations");

    sqlx::migrate!("./migrations").run(pool).await?;

    log::info!("Migrations completed successfully");
    Ok(())
}
