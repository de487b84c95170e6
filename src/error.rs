// HTTP API Error Types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::LoginError;
use crate::database::DatabaseError;

pub const INVALID_JWT_TOKEN: &str = "Invalid JWT Token";
pub const INVALID_USER: &str = "Invalid user";
pub const INVALID_PASSWORD: &str = "Invalid password";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Failures a client can observe.
///
/// Missing, malformed and rejected tokens all collapse into `Unauthorized`
/// with the same body; the distinction only reaches the server log.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request (login only)
    InvalidUser,
    InvalidPassword,

    // 401 Unauthorized
    Unauthorized,

    // 500 Internal Server Error
    InternalServerError,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidUser | ApiError::InvalidPassword => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidUser => INVALID_USER,
            ApiError::InvalidPassword => INVALID_PASSWORD,
            ApiError::Unauthorized => INVALID_JWT_TOKEN,
            ApiError::InternalServerError => INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        // Log the real error but return generic message
        tracing::error!("Database error: {}", err);
        ApiError::InternalServerError
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidUser => ApiError::InvalidUser,
            LoginError::InvalidPassword => ApiError::InvalidPassword,
            LoginError::Database(e) => e.into(),
            LoginError::Auth(e) => {
                tracing::error!("Login failed: {}", e);
                ApiError::InternalServerError
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Client errors are plain text; store failures get a JSON body
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::InternalServerError => {
                (status, Json(json!({ "error": self.message() }))).into_response()
            }
            _ => (status, self.message()).into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
