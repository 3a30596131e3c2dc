/// Request extractors with error mapping
///
/// Axum's stock `Json` extractor rejects malformed payloads with its own
/// plain-text responses (422 for a body that fails to deserialize, 415 for
/// a missing content-type header). The API's error contract maps every
/// payload problem to 400 with the standard `{error, message}` JSON body,
/// so handlers use this wrapper instead.

use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON extractor whose rejections surface as [`ApiError`]
///
/// Also usable in responses, where it delegates to `axum::Json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
