//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server port, and identifier issuance settings.

use anyhow::{Context, Result, ensure};
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 3;
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_ID_LENGTH: usize = 8;
pub const DEFAULT_ID_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub server_port: u16,
    /// Length of generated invitation and guest identifiers.
    pub id_length: usize,
    /// How many identifiers are tried before giving up on a collision.
    pub id_max_attempts: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = lookup("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|| DEFAULT_ACQUIRE_TIMEOUT_SECONDS.to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| DEFAULT_SERVER_PORT.to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let id_length = lookup("ID_LENGTH")
            .unwrap_or_else(|| DEFAULT_ID_LENGTH.to_string())
            .parse::<usize>()
            .context("ID_LENGTH must be a valid number")?;
        ensure!(id_length >= 1, "ID_LENGTH must be at least 1");

        let id_max_attempts = lookup("ID_MAX_ATTEMPTS")
            .unwrap_or_else(|| DEFAULT_ID_MAX_ATTEMPTS.to_string())
            .parse::<u32>()
            .context("ID_MAX_ATTEMPTS must be a valid number")?;
        ensure!(id_max_attempts >= 1, "ID_MAX_ATTEMPTS must be at least 1");

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            server_port,
            id_length,
            id_max_attempts,
        })
    }

    /// Configuration pointing at a private in-memory database.
    pub fn in_memory() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_seconds: DEFAULT_ACQUIRE_TIMEOUT_SECONDS,
            server_port: DEFAULT_SERVER_PORT,
            id_length: DEFAULT_ID_LENGTH,
            id_max_attempts: DEFAULT_ID_MAX_ATTEMPTS,
        }
    }
}
