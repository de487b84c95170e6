use crate::auth::{password, TokenIssuer};
use crate::cli::{utils, OutputFormat};
use crate::config::AppConfig;

pub fn hash_password(plain: &str, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let hash = password::hash_password(plain, config.security.bcrypt_cost)?;
    utils::output_value(output_format, "hash", &hash)
}

/// Same issuer the login endpoint uses, so the token is accepted by the API
pub fn issue_token(username: &str, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let tokens = TokenIssuer::from_config(&config.security)?;
    let token = tokens.issue(username)?;
    utils::output_value(output_format, "jwtToken", &token)
}
