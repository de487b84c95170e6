use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
        }
    }
}

/// JWT authentication middleware that validates tokens and injects `AuthUser`
///
/// Every rejection is the same generic 401; the reason is logged at debug.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers).map_err(|reason| {
        tracing::debug!("Rejecting {}: {}", request.uri().path(), reason);
        ApiError::Unauthorized
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::debug!("Rejecting {}: {}", request.uri().path(), e);
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Take the second space-delimited segment of the Authorization header.
///
/// The scheme word is not inspected; a header without a second segment
/// has no token.
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or("missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Authorization header is not visible ASCII")?;

    auth_str
        .split(' ')
        .nth(1)
        .ok_or("Authorization header has no token segment")
}
