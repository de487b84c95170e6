use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::{repository, State as StateRow, StateStats};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /states/ - every state, store order
pub async fn states_list(State(state): State<AppState>) -> ApiResult<Json<Vec<StateRow>>> {
    let states = repository::list_states(&state.pool).await?;
    Ok(Json(states))
}

/// GET /states/:stateId - one state, or `null` when absent
pub async fn state_get(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> ApiResult<Json<Option<StateRow>>> {
    let row = repository::get_state(&state.pool, state_id).await?;
    Ok(Json(row))
}

/// GET /states/:stateId/stats/ - summed case counts over the state's districts
pub async fn state_stats(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> ApiResult<Json<StateStats>> {
    let stats = repository::state_stats(&state.pool, state_id).await?;
    Ok(Json(stats))
}
