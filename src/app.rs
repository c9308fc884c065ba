use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/report", post(handlers::report))
        .route("/api/week", get(handlers::get_week))
        .route("/api/summary", post(handlers::summary))
        .with_state(state)
}
