use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::{self, LoginError};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Login body. Absent or non-JSON fields read as `None`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Only a JSON content type is parsed; anything else is an empty body.
    fn from_request(headers: &HeaderMap, body: &[u8]) -> Self {
        let is_json = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_start().starts_with("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Self::default();
        }
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// POST /login/ - exchange username and password for a session token
///
/// Responds `200 {"jwtToken": "..."}`, or `400` with `Invalid user` /
/// `Invalid password` as plain text. A missing or unreadable body has no
/// username and is therefore `Invalid user`.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<LoginResponse>> {
    let payload = LoginRequest::from_request(&headers, &body);

    let Some(username) = payload.username else {
        tracing::warn!("Login failed: no username supplied");
        return Err(ApiError::InvalidUser);
    };
    let password = payload.password.unwrap_or_default();

    match auth::login(&state.pool, &state.tokens, &username, &password).await {
        Ok(jwt_token) => {
            tracing::info!("User logged in: {}", username);
            Ok(Json(LoginResponse { jwt_token }))
        }
        Err(e @ (LoginError::InvalidUser | LoginError::InvalidPassword)) => {
            tracing::warn!("Login failed for '{}': {}", username, e);
            Err(e.into())
        }
        // Store and signing failures are logged once by the ApiError conversion
        Err(e) => Err(e.into()),
    }
}
