use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/hydration", post(handlers::log_hydration))
        .route("/api/goal", post(handlers::set_goal))
        .route("/api/creatine", post(handlers::log_creatine))
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
