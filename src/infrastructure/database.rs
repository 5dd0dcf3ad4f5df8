//! Connection manager: owns the shared Postgres pool for the lifetime of
//! the process.
//!
//! The pool is created once at startup, gated by a single bounded
//! reachability check, and closed after the HTTP server returns. Handlers
//! never touch it directly; they receive a repository built around a clone
//! of the pool handle.

use crate::infrastructure::config::Config;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid database configuration: {0}")]
    InvalidConfiguration(#[source] sqlx::Error),
    #[error("Database is unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),
    #[error("Database did not respond within {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Builds the pool without opening a connection. Only a malformed URL
    /// fails here.
    pub fn connect(config: &Config) -> Result<Self, StartupError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy(&config.database_url)
            .map_err(StartupError::InvalidConfiguration)?;
        Ok(Self { pool })
    }

    /// Startup gate: build the pool, then require one round trip within
    /// `config.startup_timeout`.
    #[instrument(skip(config), fields(database_url = %config.database_url_masked()))]
    pub async fn initialize(config: &Config) -> Result<Self, StartupError> {
        let database = Self::connect(config)?;
        database.ping(config.startup_timeout).await?;
        info!("Database connection pool ready");
        Ok(database)
    }

    pub async fn ping(&self, timeout: Duration) -> Result<(), StartupError> {
        let round_trip = sqlx::query("SELECT 1").execute(&self.pool);
        match tokio::time::timeout(timeout, round_trip).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                error!(error = %e, "Database ping failed");
                Err(StartupError::Unreachable(e))
            }
            Err(_) => {
                error!(timeout = ?timeout, "Database ping timed out");
                Err(StartupError::Timeout(timeout))
            }
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}
