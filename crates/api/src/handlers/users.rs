//! Handlers for user accounts.
//!
//! Accounts are not persisted yet. Each write validates the submitted
//! shape and echoes the normalized value back.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fitness_core::types::DbId;
use fitness_db::models::user::{CreateUser, UpdateUser, UserResponse};

use crate::error::AppResult;
use crate::extract::{PathParam, ValidatedJson};
use crate::response::DataResponse;

/// GET /api/v1/users
pub async fn list_users() -> AppResult<impl IntoResponse> {
    let users: Vec<UserResponse> = Vec::new();
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/users
pub async fn create_user(
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(email = %input.email, "User accepted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}

/// PATCH /api/v1/users/{id}
pub async fn update_user(
    PathParam(user_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%user_id, "User update accepted");
    Ok(Json(DataResponse { data: input }))
}
