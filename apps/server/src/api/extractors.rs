//! Custom Axum extractors that reject with the API's `{error}` body.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON request body.
///
/// Unlike `axum::Json` this does not insist on a `content-type` header and
/// reports malformed bodies as a 400 validation error.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::Validation(format!("Failed to read request body: {}", e)))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| Error::Validation(format!("Invalid JSON in request body: {}", e)))?;

        Ok(JsonBody(value))
    }
}

/// Query string parameters, rejecting as a 400 validation error.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(format!("Invalid query string: {}", e.body_text())))?;
        Ok(QueryParams(value))
    }
}
