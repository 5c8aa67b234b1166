//! Decorative animation route

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

/// Create animation routes
pub fn animation_routes() -> Router<AppState> {
    Router::new().route("/animation", get(get_animation))
}

/// GET /api/v1/animation - Animation JSON, or 204 when unavailable
async fn get_animation(State(state): State<AppState>) -> Response {
    match state.animation().get().await {
        Some(animation) => Json(animation.as_ref().clone()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
