pub mod db;
pub mod secrets;
pub mod user;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

/// Open the configured store and make sure the tables exist
async fn open_store(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::init_schema(&pool).await?;
    Ok(pool)
}
