use clap::Parser;
use covid_portal::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Same .env the server reads, so both agree on DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = covid_portal::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
