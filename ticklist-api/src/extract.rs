/// Request extractors that keep failures inside the JSON envelope
///
/// Axum's stock `Json` and `Path` extractors reject with plain-text
/// responses. Clients of this API always receive the JSON failure
/// envelope, including for malformed bodies and malformed path
/// parameters, so these wrappers translate every rejection into an
/// [`ApiError`].

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

/// `axum::Json` with envelope-shaped rejections
///
/// Usable on both sides of a handler: as an extractor, and as a response
/// (delegating to `axum::Json`).
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(_) => Err(ApiError::BadRequest("invalid request body".to_string())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// `axum::extract::Path` with envelope-shaped rejections
///
/// A path parameter that does not parse (e.g. a malformed UUID) produces
/// the 400 envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Path(value)),
            Err(_) => Err(ApiError::BadRequest("invalid path parameter".to_string())),
        }
    }
}
