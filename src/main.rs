use anyhow::Context;
use tracing_subscriber::EnvFilter;

use covid_portal::auth::TokenIssuer;
use covid_portal::config::AppConfig;
use covid_portal::database::DatabaseManager;
use covid_portal::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting COVID-19 portal in {:?} mode", config.environment);

    // The store must open or the process exits
    let pool = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("DB Error: cannot open {}", config.database.url))?;
    DatabaseManager::init_schema(&pool)
        .await
        .context("DB Error: schema bootstrap failed")?;

    let tokens = TokenIssuer::from_config(&config.security)
        .context("JWT_SECRET must be set to a non-empty value")?;

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server Running at http://{}/", bind_addr);

    let state = AppState::new(pool.clone(), tokens, config);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
