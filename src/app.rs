use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/chart", get(handlers::get_chart))
        .route(
            "/api/selection",
            get(handlers::get_selection).post(handlers::update_selection),
        )
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
