pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Portal CLI - store and account administration for the COVID-19 portal API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Database bootstrap and seeding")]
    Db {
        #[command(subcommand)]
        cmd: commands::db::DbCommands,
    },

    #[command(about = "Login account management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Print a bcrypt hash of a password")]
    HashPassword {
        #[arg(help = "Plaintext password")]
        password: String,
    },

    #[command(about = "Issue a session token for a username using the configured secret")]
    Token {
        #[arg(help = "Username to put in the token")]
        username: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Db { cmd } => commands::db::handle(cmd, &config, output_format).await,
        Commands::User { cmd } => commands::user::handle(cmd, &config, output_format).await,
        Commands::HashPassword { password } => {
            commands::secrets::hash_password(&password, &config, output_format)
        }
        Commands::Token { username } => commands::secrets::issue_token(&username, &config, output_format),
    }
}
