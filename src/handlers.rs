use crate::catalog::Workout;
use crate::errors::AppError;
use crate::models::{
    CompleteRequest, CompleteResponse, HistoryRecord, ProfileResponse, WorkoutQuery,
    WorkoutResponse,
};
use crate::state::AppState;
use crate::thumbnail::thumbnail_url;
use crate::ui::{render_index, Notice};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::warn;

const NOT_FOUND_MESSAGE: &str = "workout not found for this combination";

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub done: Option<u32>,
}

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let profile = load_profile(&state).await;
    let notice = query.done.map(Notice::Completed);
    Html(render_index(&state.catalog, &profile, notice, None))
}

pub async fn workout_page(
    State(state): State<AppState>,
    Query(query): Query<WorkoutQuery>,
) -> (StatusCode, Html<String>) {
    let profile = load_profile(&state).await;
    match find_workout(&state, &query) {
        Ok(workout) => (
            StatusCode::OK,
            Html(render_index(&state.catalog, &profile, None, Some(&workout))),
        ),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Html(render_index(&state.catalog, &profile, Some(Notice::NotFound), None)),
        ),
    }
}

pub async fn get_workout(
    State(state): State<AppState>,
    Query(query): Query<WorkoutQuery>,
) -> Result<Json<WorkoutResponse>, AppError> {
    Ok(Json(find_workout(&state, &query)?))
}

pub async fn complete(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRequest>,
) -> Result<Json<CompleteResponse>, AppError> {
    let record = apply_completion(&state, &payload).await?;
    Ok(Json(CompleteResponse {
        message: completion_message(payload.duration),
        profile: ProfileResponse::from(&record),
    }))
}

pub async fn complete_form(
    State(state): State<AppState>,
    Form(payload): Form<CompleteRequest>,
) -> Result<Redirect, AppError> {
    apply_completion(&state, &payload).await?;
    Ok(Redirect::to(&format!("/?done={}", payload.duration)))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(load_profile(&state).await)
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryRecord> {
    let store = state.history.lock().await;
    Json(store.load().await)
}

pub fn completion_message(duration: u32) -> String {
    format!("Workout of {duration} min completed and saved!")
}

async fn apply_completion(
    state: &AppState,
    payload: &CompleteRequest,
) -> Result<HistoryRecord, AppError> {
    let now = Local::now().naive_local();
    let store = state.history.lock().await;
    store
        .record_workout(&payload.category, payload.duration, now)
        .await
}

async fn load_profile(state: &AppState) -> ProfileResponse {
    let store = state.history.lock().await;
    ProfileResponse::from(&store.load().await)
}

fn find_workout(state: &AppState, query: &WorkoutQuery) -> Result<WorkoutResponse, AppError> {
    let workout = state
        .catalog
        .lookup(&query.category, &query.level, &query.duration)
        .ok_or_else(|| {
            warn!(
                category = %query.category,
                level = %query.level,
                duration = %query.duration,
                "workout lookup missed"
            );
            AppError::not_found(NOT_FOUND_MESSAGE)
        })?;

    Ok(to_response(query, workout))
}

fn to_response(query: &WorkoutQuery, workout: &Workout) -> WorkoutResponse {
    WorkoutResponse {
        title: format!(
            "{} - {} ({} min)",
            query.category.to_uppercase(),
            query.level,
            query.duration
        ),
        category: query.category.clone(),
        level: query.level.clone(),
        duration: query.duration.clone(),
        exercises: workout.exercises.clone(),
        thumbnail: workout.video.as_deref().and_then(thumbnail_url),
        video: workout.video.clone(),
    }
}
