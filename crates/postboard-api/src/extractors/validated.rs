//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// The body is parsed as JSON whatever its `Content-Type`. An absent or
/// unparseable body is treated as the type's default value, so the caller
/// sees the same "field is required" message either way.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable request body, treating as empty");
                Bytes::new()
            }
        };

        let value = if body.is_empty() {
            T::default()
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Malformed JSON body, treating as empty");
                T::default()
            })
        };

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
