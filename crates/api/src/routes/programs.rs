use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::programs;
use crate::state::AppState;

/// Routes mounted at `/programs`.
///
/// ```text
/// GET    /        -> list_programs
/// POST   /        -> create_program
/// PATCH  /{id}    -> update_program
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(programs::list_programs).post(programs::create_program))
        .route("/{id}", patch(programs::update_program))
}
