use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::workout_logs;
use crate::state::AppState;

/// Routes mounted at `/workout-logs`.
///
/// ```text
/// GET    /        -> list_workout_logs
/// POST   /        -> create_workout_log
/// PATCH  /{id}    -> update_workout_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workout_logs::list_workout_logs).post(workout_logs::create_workout_log))
        .route("/{id}", patch(workout_logs::update_workout_log))
}
