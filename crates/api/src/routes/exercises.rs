use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /        -> list_exercises
/// POST   /        -> create_exercise
/// PATCH  /{id}    -> update_exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exercises::list_exercises).post(exercises::create_exercise))
        .route("/{id}", patch(exercises::update_exercise))
}
