//! Handlers for logged workout sessions.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fitness_core::types::DbId;
use fitness_db::models::workout_log::{
    CreateWorkoutLog, UpdateWorkoutLog, WorkoutLogDraft, WorkoutLogSummary,
};

use crate::error::AppResult;
use crate::extract::{PathParam, ValidatedJson};
use crate::response::DataResponse;

/// GET /api/v1/workout-logs
pub async fn list_workout_logs() -> AppResult<impl IntoResponse> {
    let logs: Vec<WorkoutLogSummary> = Vec::new();
    Ok(Json(DataResponse { data: logs }))
}

/// POST /api/v1/workout-logs
///
/// Echoes the session with `total_duration_minutes`, which is `null` while
/// the session has no end time.
pub async fn create_workout_log(
    ValidatedJson(input): ValidatedJson<CreateWorkoutLog>,
) -> AppResult<impl IntoResponse> {
    let draft = WorkoutLogDraft::from(input);
    tracing::info!(
        start_time = %draft.log.start_time,
        duration_minutes = ?draft.total_duration_minutes,
        "Workout log accepted",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}

/// PATCH /api/v1/workout-logs/{id}
///
/// Typically used to close an open session by setting `end_time`. The
/// update carries no start time, so no duration is derived here.
pub async fn update_workout_log(
    PathParam(workout_log_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateWorkoutLog>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%workout_log_id, "Workout log update accepted");
    Ok(Json(DataResponse { data: input }))
}
