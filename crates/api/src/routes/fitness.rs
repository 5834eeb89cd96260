use axum::routing::get;
use axum::Router;

use crate::handlers::fitness;
use crate::state::AppState;

/// ```text
/// GET    /workouts    -> list_workouts
/// POST   /workouts    -> create_workout
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/workouts",
        get(fitness::list_workouts).post(fitness::create_workout),
    )
}
