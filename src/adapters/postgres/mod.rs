//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAchievementCatalog` - Read-only achievement catalog
//! - `PostgresUserAchievementRepository` - Per-user progress rows
//! - `PostgresTherapyRepository` - Therapy programs

mod achievement_catalog;
mod therapy_repository;
mod user_achievement_repository;

pub use achievement_catalog::PostgresAchievementCatalog;
pub use therapy_repository::PostgresTherapyRepository;
pub use user_achievement_repository::PostgresUserAchievementRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool sized from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
