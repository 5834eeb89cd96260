//! Handlers for the workout entry list/create pair.
//!
//! Nothing is persisted yet: the list is always empty and a created entry
//! is echoed back unchanged.

use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;

/// A single logged exercise bout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkoutEntry {
    pub id: i64,
    pub exercise: String,
    pub duration_minutes: i64,
    pub calories_burned: i64,
}

/// GET /api/v1/workouts
pub async fn list_workouts() -> Json<Vec<WorkoutEntry>> {
    Json(Vec::new())
}

/// POST /api/v1/workouts
pub async fn create_workout(
    ValidatedJson(entry): ValidatedJson<WorkoutEntry>,
) -> AppResult<Json<WorkoutEntry>> {
    tracing::info!(id = entry.id, exercise = %entry.exercise, "Workout entry received");
    Ok(Json(entry))
}
