//! Extractors that reject with [`AppError`] instead of axum's plain-text
//! rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use fitness_core::validation::from_value;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body deserialized and checked with
/// [`from_value`](fitness_core::validation::from_value).
///
/// Malformed JSON is a [`AppError::BadRequest`]; a well-formed body that
/// does not fit the record shape or breaks a constraint is a validation
/// error naming the field path.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateWorkout>) -> AppResult<...>
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ValidatedJson(from_value(value)?))
    }
}

/// URL path parameters. An unparsable value (e.g. an id that is not a
/// UUID) is a [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(PathParam(value))
    }
}
