use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Creates the main API router with all routes.
///
/// CORS is wide open: the browser front end is served from a different
/// origin than the API.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users/all", get(handlers::all_users))
        .route("/top-matching-users", get(handlers::top_matching_users))
        .route("/recommended-movies", get(handlers::recommended_movies))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
