use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::workout_templates;
use crate::state::AppState;

/// Routes mounted at `/workout-templates`.
///
/// ```text
/// GET    /        -> list_workout_templates
/// POST   /        -> create_workout_template
/// PATCH  /{id}    -> update_workout_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workout_templates::list_workout_templates).post(workout_templates::create_workout_template))
        .route("/{id}", patch(workout_templates::update_workout_template))
}
