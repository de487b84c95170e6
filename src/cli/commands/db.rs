use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::config::AppConfig;
use crate::database::{repository, DatabaseManager, State};

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the user, state and district tables if missing")]
    Init,

    #[command(about = "Add a state row")]
    AddState {
        #[arg(help = "State id")]
        state_id: i64,
        #[arg(help = "State name")]
        state_name: String,
        #[arg(help = "Population")]
        population: i64,
    },

    #[command(about = "Check that the store answers")]
    Ping,
}

pub async fn handle(cmd: DbCommands, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        DbCommands::Init => {
            let pool = super::open_store(config).await?;
            pool.close().await;
            utils::output_success(
                output_format,
                &format!("Schema ready in {}", config.database.url),
                None,
            )
        }
        DbCommands::AddState { state_id, state_name, population } => {
            let pool = super::open_store(config).await?;
            let state = State { state_id, state_name, population };
            repository::insert_state(&pool, &state).await?;
            pool.close().await;
            utils::output_success(
                output_format,
                &format!("Added state {} ({})", state.state_id, state.state_name),
                Some(serde_json::to_value(&state)?),
            )
        }
        DbCommands::Ping => {
            let pool = DatabaseManager::connect(&config.database).await?;
            DatabaseManager::health_check(&pool).await?;
            pool.close().await;
            utils::output_success(
                output_format,
                "Database reachable",
                Some(json!({ "url": config.database.url })),
            )
        }
    }
}
