//! PostgreSQL connection handle
//!
//! Owns the connection pool. It is created once at startup, handed to the
//! repository, and closed after the server stops.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::database::DatabaseConfig;

#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Opens the pool; fails if the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let target = config.describe();
        info!("🔌 Connecting to {}", target);

        let pool = config
            .pool_options()
            .connect_with(config.connect_options.clone())
            .await
            .with_context(|| format!("could not connect to {}", target))?;

        info!(
            "✅ Database pool ready (max {} connections)",
            config.max_connections
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Waits for checked-out connections to be returned, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("🔌 Database pool closed");
    }
}
