use sqlx::SqlitePool;
use thiserror::Error;

use super::password::verify_password;
use super::{AuthError, TokenIssuer};
use crate::database::{repository, DatabaseError};

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid user")]
    InvalidUser,

    #[error("Invalid password")]
    InvalidPassword,

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Check credentials against the user table and issue a token.
///
/// One store read, no writes.
pub async fn login(
    pool: &SqlitePool,
    tokens: &TokenIssuer,
    username: &str,
    password: &str,
) -> Result<String, LoginError> {
    let user = repository::find_user(pool, username)
        .await?
        .ok_or(LoginError::InvalidUser)?;

    if !verify_password(password, &user.password)? {
        return Err(LoginError::InvalidPassword);
    }

    Ok(tokens.issue(&user.username)?)
}
