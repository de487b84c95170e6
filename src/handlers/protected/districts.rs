use axum::{
    extract::{Path, State},
    http::header::LOCATION,
    response::IntoResponse,
    Extension, Json,
};

use crate::database::{repository, District, NewDistrict};
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

pub const DISTRICT_ADDED: &str = "District Successfully Added";
pub const DISTRICT_UPDATED: &str = "District Details Updated";
pub const DISTRICT_REMOVED: &str = "District Removed";

/// POST /districts - insert a district
///
/// The new row's URL is returned in `Location`.
pub async fn district_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(district): Json<NewDistrict>,
) -> ApiResult<impl IntoResponse> {
    let district_id = repository::create_district(&state.pool, &district).await?;
    tracing::info!("{} added district {} ({})", user.username, district_id, district.district_name);

    Ok(([(LOCATION, format!("/districts/{}", district_id))], DISTRICT_ADDED))
}

/// GET /districts/:districtId - one district, or `null` when absent
pub async fn district_get(
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
) -> ApiResult<Json<Option<District>>> {
    let district = repository::get_district(&state.pool, district_id).await?;
    Ok(Json(district))
}

/// PUT /districts/:districtId - overwrite every column
pub async fn district_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(district_id): Path<i64>,
    Json(district): Json<NewDistrict>,
) -> ApiResult<&'static str> {
    let updated = repository::update_district(&state.pool, district_id, &district).await?;
    tracing::info!("{} updated district {} ({} row)", user.username, district_id, updated);
    Ok(DISTRICT_UPDATED)
}

/// DELETE /districts/:districtId - succeeds whether or not the row existed
pub async fn district_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(district_id): Path<i64>,
) -> ApiResult<&'static str> {
    let removed = repository::delete_district(&state.pool, district_id).await?;
    tracing::info!("{} removed district {} ({} row)", user.username, district_id, removed);
    Ok(DISTRICT_REMOVED)
}
