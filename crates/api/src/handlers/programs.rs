//! Handlers for multi-week training programs.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fitness_core::types::DbId;
use fitness_db::models::program::{CreateProgram, ProgramSummary, UpdateProgram};

use crate::error::AppResult;
use crate::extract::{PathParam, ValidatedJson};
use crate::response::DataResponse;

/// GET /api/v1/programs
pub async fn list_programs() -> AppResult<impl IntoResponse> {
    let programs: Vec<ProgramSummary> = Vec::new();
    Ok(Json(DataResponse { data: programs }))
}

/// POST /api/v1/programs
///
/// Rejects schedules with two entries in the same week/day slot, and
/// entries whose rest-day flag disagrees with their workout reference.
pub async fn create_program(
    ValidatedJson(input): ValidatedJson<CreateProgram>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        name = %input.name,
        duration_weeks = input.duration_weeks,
        schedule_len = input.schedule.len(),
        "Program accepted",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}

/// PATCH /api/v1/programs/{id}
pub async fn update_program(
    PathParam(program_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProgram>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%program_id, "Program update accepted");
    Ok(Json(DataResponse { data: input }))
}
