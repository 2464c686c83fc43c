use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/moods", get(handlers::get_moods).post(handlers::save_mood))
        .route("/api/habits", get(handlers::get_habits).post(handlers::add_habit))
        .route("/api/habits/:id/complete", post(handlers::complete_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/resources", get(handlers::get_resources))
        .with_state(state)
}
