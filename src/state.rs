use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::TokenIssuer;
use crate::config::AppConfig;

/// Shared handles built once at startup and cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenIssuer>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenIssuer, config: AppConfig) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}
