//! Extractors whose rejections render as [`ApiError`] failure envelopes instead of axum's
//! plain-text responses.

use super::ApiError;
use crate::validation::SchemaValidationError;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON request body. An unreadable body or a payload that does not match `T` fails with
/// 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| SchemaValidationError::request(rejection.body_text()))?;
        let value = serde_json::from_slice(&body).map_err(SchemaValidationError::from)?;
        Ok(Self(value))
    }
}

/// Query string. Values that do not parse as `T` fail with 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::try_from_uri(&parts.uri)
            .map_err(|rejection| SchemaValidationError::request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
