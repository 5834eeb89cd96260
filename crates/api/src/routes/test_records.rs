use axum::routing::get;
use axum::Router;

use crate::handlers::test_records;
use crate::state::AppState;

/// ```text
/// GET    /test    -> list_test_records
/// POST   /test    -> create_test_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/test",
        get(test_records::list_test_records).post(test_records::create_test_record),
    )
}
