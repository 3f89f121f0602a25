//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the database connection pool,
//! creating the schema, and providing helpers shared by the repositories.

use crate::config::Config;
use anyhow::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use std::time::Duration;

pub mod models;

const CREATE_INVITATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS invitations (
        id TEXT PRIMARY KEY,
        couple_name1 TEXT,
        couple_name2 TEXT,
        date TEXT,
        location TEXT
    )
"#;

const CREATE_GUESTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS guests (
        id TEXT PRIMARY KEY,
        invitor_id TEXT,
        name TEXT,
        status TEXT,
        FOREIGN KEY (invitor_id) REFERENCES invitations(id)
    )
"#;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Initializes the database connection pool.
    ///
    /// Foreign keys are left unenforced so guests may reference invitations
    /// that do not exist.
    pub async fn new(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds));

        // Every connection to `:memory:` opens a separate database, so keep
        // exactly one alive for the lifetime of the pool.
        pool_options = if is_in_memory(&config.database_url) {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        Ok(Database { pool })
    }

    /// Creates the `invitations` and `guests` tables if they are absent.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_INVITATIONS_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_GUESTS_TABLE).execute(&self.pool).await?;

        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Reports whether a repository error is a primary-key or unique constraint
/// violation.
pub fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db_error| db_error.is_unique_violation())
}

/// Fresh in-memory database with the schema applied.
#[cfg(test)]
pub(crate) async fn test_database() -> Database {
    let db = Database::new(&Config::in_memory()).await.unwrap();
    db.init_schema().await.unwrap();
    db
}
