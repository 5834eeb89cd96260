//! Handlers for the `"Test"` table connectivity probe.
//!
//! These routes talk to the database directly through
//! [`TestRecordRepo`]; failures carry the driver message in the response.

use axum::extract::State;
use axum::Json;
use fitness_db::models::test_record::{CreateTestRecord, TestRecord};
use fitness_db::repositories::TestRecordRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /api/v1/test
pub async fn list_test_records(State(state): State<AppState>) -> AppResult<Json<Vec<TestRecord>>> {
    let records = TestRecordRepo::list(&state.config.database)
        .await
        .map_err(|e| AppError::database("Failed to fetch test records", e))?;

    tracing::debug!(count = records.len(), "Fetched test records");
    Ok(Json(records))
}

/// POST /api/v1/test
pub async fn create_test_record(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTestRecord>,
) -> AppResult<Json<StatusResponse>> {
    TestRecordRepo::create(&state.config.database, &input)
        .await
        .map_err(|e| AppError::database("Failed to create test record", e))?;

    tracing::info!(name = %input.name, "Test record created");
    Ok(Json(StatusResponse::success("Test record created")))
}
