use clap::Subcommand;
use serde_json::json;

use crate::auth::password::hash_password;
use crate::cli::{utils, OutputFormat};
use crate::config::AppConfig;
use crate::database::repository;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a login account")]
    Add {
        #[arg(help = "Username (unique)")]
        username: String,
        #[arg(help = "Plaintext password; stored as a bcrypt hash")]
        password: String,
        #[arg(long, help = "Display name")]
        name: Option<String>,
        #[arg(long, help = "Gender")]
        gender: Option<String>,
        #[arg(long, help = "Location")]
        location: Option<String>,
    },

    #[command(about = "Show a login account (password hash omitted)")]
    Show {
        #[arg(help = "Username")]
        username: String,
    },
}

pub async fn handle(cmd: UserCommands, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Add { username, password, name, gender, location } => {
            let hash = hash_password(&password, config.security.bcrypt_cost)?;
            let pool = super::open_store(config).await?;
            repository::insert_user(
                &pool,
                &username,
                &hash,
                name.as_deref(),
                gender.as_deref(),
                location.as_deref(),
            )
            .await?;
            pool.close().await;
            utils::output_success(
                output_format,
                &format!("Created user {}", username),
                Some(json!({ "username": username })),
            )
        }
        UserCommands::Show { username } => {
            let pool = super::open_store(config).await?;
            let user = repository::find_user(&pool, &username).await?;
            pool.close().await;
            match user {
                Some(user) => utils::output_success(
                    output_format,
                    &format!("User {}", user.username),
                    Some(serde_json::to_value(&user)?),
                ),
                None => anyhow::bail!("no such user: {}", username),
            }
        }
    }
}
