use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fitness_core::error::CoreError;
use fitness_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and [`DbError`] for
/// data-access failures. Implements [`IntoResponse`] to produce consistent
/// `{"error", "code"}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fitness_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-access failure. `context` prefixes the driver message in the
    /// response body.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: DbError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Wrap a data-access failure with a description of what was attempted.
    pub fn database(context: &'static str, source: DbError) -> Self {
        AppError::Database { context, source }
    }
}

impl From<DbError> for AppError {
    fn from(source: DbError) -> Self {
        AppError::database("Database error", source)
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            AppError::Database { context, source } => {
                tracing::error!(error = %source, context, "Database operation failed");
                let (status, code) = classify_db_error(source);
                (status, code, format!("{context}: {source}"))
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a data-access failure to an HTTP status and error code.
///
/// - Missing settings map to 503 `DATABASE_NOT_CONFIGURED`.
/// - Connection failures and timeouts map to 503 `DATABASE_UNAVAILABLE`.
/// - Anything that failed after connecting maps to 500 `DATABASE_QUERY_FAILED`.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str) {
    match err {
        DbError::MissingConfig(_) => (StatusCode::SERVICE_UNAVAILABLE, "DATABASE_NOT_CONFIGURED"),
        DbError::Connect(_) | DbError::ConnectTimeout(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "DATABASE_UNAVAILABLE")
        }
        DbError::Query(_) | DbError::UnsupportedType { .. } | DbError::RowShape(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_QUERY_FAILED")
        }
    }
}
