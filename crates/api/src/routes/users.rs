use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /        -> list_users
/// POST   /        -> create_user
/// PATCH  /{id}    -> update_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", patch(users::update_user))
}
