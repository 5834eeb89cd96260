//! Handlers for workout templates (named, ordered sets of exercises).
//!
//! A template is accepted only if every set has at least one step and its
//! step orders run 1..N without gaps or repeats.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fitness_core::types::DbId;
use fitness_db::models::workout::{CreateWorkout, UpdateWorkout, WorkoutSummary};

use crate::error::AppResult;
use crate::extract::{PathParam, ValidatedJson};
use crate::response::DataResponse;

/// GET /api/v1/workout-templates
pub async fn list_workout_templates() -> AppResult<impl IntoResponse> {
    let templates: Vec<WorkoutSummary> = Vec::new();
    Ok(Json(DataResponse { data: templates }))
}

/// POST /api/v1/workout-templates
pub async fn create_workout_template(
    ValidatedJson(input): ValidatedJson<CreateWorkout>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        name = %input.name,
        set_count = input.sets.len(),
        "Workout template accepted",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}

/// PATCH /api/v1/workout-templates/{id}
pub async fn update_workout_template(
    PathParam(workout_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateWorkout>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%workout_id, "Workout template update accepted");
    Ok(Json(DataResponse { data: input }))
}
