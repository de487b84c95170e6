use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Full router. Paths ending in `/` also answer without the slash.
pub fn app(state: AppState) -> Router {
    let cors = if state.config.api.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Public
        .merge(public_routes())
        // Protected (JWT auth)
        .merge(protected_routes(state.clone()))
        .with_state(state)
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(public::health))
        .route("/login", post(public::login))
        .route("/login/", post(public::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/states", get(protected::states_list))
        .route("/states/", get(protected::states_list))
        .route("/states/:stateId", get(protected::state_get))
        .route("/states/:stateId/stats", get(protected::state_stats))
        .route("/states/:stateId/stats/", get(protected::state_stats))
        .route("/districts", post(protected::district_post))
        .route(
            "/districts/:districtId",
            get(protected::district_get)
                .put(protected::district_put)
                .delete(protected::district_delete),
        )
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
