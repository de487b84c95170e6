#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{json, Value};

use covid_portal::auth::{password, TokenIssuer};
use covid_portal::config::AppConfig;
use covid_portal::database::{repository, DatabaseManager, State};
use covid_portal::{app, AppState};

pub const SECRET: &str = "integration-test-secret";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "correct";

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Boot the router on a free port against a fresh, seeded in-memory store
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.database.url = "sqlite::memory:".to_string();
        config.security.jwt_secret = SECRET.to_string();
        config.security.bcrypt_cost = 4;
        config.api.port = port;

        let pool = DatabaseManager::connect(&config.database).await?;
        DatabaseManager::init_schema(&pool).await?;
        seed(&pool, config.security.bcrypt_cost).await?;

        let tokens = TokenIssuer::from_config(&config.security)?;
        let state = AppState::new(pool, tokens, config);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test port")?;
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("server");
        });

        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in as the seeded user and return the token
    pub async fn token(&self) -> Result<String> {
        let res = self
            .client
            .post(self.url("/login/"))
            .json(&json!({ "username": USERNAME, "password": PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "login failed: {}", res.status());
        let body = res.json::<Value>().await?;
        body["jwtToken"]
            .as_str()
            .map(str::to_string)
            .context("jwtToken missing from login response")
    }

    pub async fn get(&self, path: &str, token: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }
}

async fn seed(pool: &sqlx::SqlitePool, cost: u32) -> Result<()> {
    let hash = password::hash_password(PASSWORD, cost)?;
    repository::insert_user(pool, USERNAME, &hash, Some("Administrator"), None, Some("Delhi")).await?;

    for (state_id, state_name, population) in [
        (1, "Andaman and Nicobar Islands", 380581),
        (2, "Andhra Pradesh", 49386799),
        (3, "Arunachal Pradesh", 1383727),
    ] {
        repository::insert_state(
            pool,
            &State {
                state_id,
                state_name: state_name.to_string(),
                population,
            },
        )
        .await?;
    }
    Ok(())
}

pub fn district_body(name: &str, state_id: i64) -> Value {
    json!({
        "districtName": name,
        "stateId": state_id,
        "cases": 2323,
        "cured": 2000,
        "active": 315,
        "deaths": 8
    })
}
