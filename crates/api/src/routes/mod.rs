pub mod exercises;
pub mod fitness;
pub mod health;
pub mod programs;
pub mod test_records;
pub mod users;
pub mod workout_logs;
pub mod workout_templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          health probe
///
/// /workouts                        list, create (echo)
/// /test                            list, create ("Test" table probe)
///
/// /users                           list, create
/// /users/{id}                      update
/// /exercises                       list, create
/// /exercises/{id}                  update
/// /workout-templates               list, create
/// /workout-templates/{id}          update
/// /programs                        list, create
/// /programs/{id}                   update
/// /workout-logs                    list, create
/// /workout-logs/{id}               update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(fitness::router())
        .merge(test_records::router())
        .nest("/users", users::router())
        .nest("/exercises", exercises::router())
        .nest("/workout-templates", workout_templates::router())
        .nest("/programs", programs::router())
        .nest("/workout-logs", workout_logs::router())
}
