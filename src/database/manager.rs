use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the store adapter
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS user (
        username TEXT PRIMARY KEY,
        name TEXT,
        password TEXT NOT NULL,
        gender TEXT,
        location TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS state (
        state_id INTEGER PRIMARY KEY,
        state_name TEXT NOT NULL,
        population INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS district (
        district_id INTEGER PRIMARY KEY AUTOINCREMENT,
        district_name TEXT NOT NULL,
        state_id INTEGER NOT NULL,
        cases INTEGER NOT NULL,
        cured INTEGER NOT NULL,
        active INTEGER NOT NULL,
        deaths INTEGER NOT NULL
    )
    "#,
];

/// Builds the shared connection pool handed to every handler
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the store described by `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::InvalidDatabaseUrl(format!("{}: {}", config.url, e)))?
            .create_if_missing(config.create_if_missing);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));

        // An in-memory database disappears with its last connection
        if Self::is_memory_url(&config.url) {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        info!("Opened database: {}", config.url);
        Ok(pool)
    }

    /// Fresh private in-memory store, used by tests and the CLI dry runs
    pub async fn connect_memory() -> Result<SqlitePool, DatabaseError> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            create_if_missing: true,
        })
        .await
    }

    /// Create the user, state and district tables if they are missing
    pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    fn is_memory_url(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }
}
