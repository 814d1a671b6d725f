//! Database layer for the catalog
//!
//! Provides:
//! - SeaORM entity models for the three catalog tables
//! - Connection pool management with a bounded acquire wait
//! - A scoped transaction helper
//! - The detail search query builder
//! - Repository pattern for data access

pub mod models;
mod query;
mod repository;
mod transaction;

pub use query::{DetailQuery, DetailView};
pub use repository::{CreatedDetail, NewProduct, NewSupplier, Repository};
pub use transaction::run_in_transaction;

use crate::config::DatabaseConfig;
use crate::errors::{AppError, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!(url = %config.redacted_url(), "Connecting to database...");

        let mut opts = ConnectOptions::new(config.connection_url());
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .sqlx_logging(true);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Failed to connect: {}", e),
            })?;

        let pool = Self { conn };
        pool.ping().await?;

        info!("Database connection established");

        Ok(pool)
    }

    /// Wrap an already established connection
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get the underlying connection pool
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Ping the database to check connectivity
    pub async fn ping(&self) -> Result<()> {
        self.conn
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Ping failed: {}", e),
            })?;

        Ok(())
    }

    /// Close all pooled connections
    pub async fn close(self) -> Result<()> {
        self.conn.close().await.map_err(Into::into)
    }
}
