use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/workout", get(handlers::workout_page))
        .route("/workout/complete", post(handlers::complete_form))
        .route("/api/workout", get(handlers::get_workout))
        .route("/api/workouts/complete", post(handlers::complete))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
