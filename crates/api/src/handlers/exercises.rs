//! Handlers for the exercise catalogue.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fitness_core::types::DbId;
use fitness_db::models::exercise::{CreateExercise, ExerciseResponse, UpdateExercise};

use crate::error::AppResult;
use crate::extract::{PathParam, ValidatedJson};
use crate::response::DataResponse;

/// GET /api/v1/exercises
pub async fn list_exercises() -> AppResult<impl IntoResponse> {
    let exercises: Vec<ExerciseResponse> = Vec::new();
    Ok(Json(DataResponse { data: exercises }))
}

/// POST /api/v1/exercises
pub async fn create_exercise(
    ValidatedJson(input): ValidatedJson<CreateExercise>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(name = %input.name, "Exercise accepted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}

/// PATCH /api/v1/exercises/{id}
pub async fn update_exercise(
    PathParam(exercise_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateExercise>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%exercise_id, "Exercise update accepted");
    Ok(Json(DataResponse { data: input }))
}
