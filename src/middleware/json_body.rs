/**
 * JSON Body Extraction
 *
 * This module provides the `JsonBody` extractor used by the POST
 * handlers. It buffers the request body up to a fixed ceiling and
 * deserializes it, mapping both failure modes to the API's 400 envelope:
 *
 * - body over the ceiling -> "Payload too large" (buffering stops at the
 *   limit; the remainder of the body is never read)
 * - undecodable JSON -> "Invalid JSON"
 *
 * An empty body deserializes as `{}`, so endpoints report their own
 * field-presence errors instead of a parse error.
 */

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Maximum accepted request body size: 1 MiB.
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Size-capped JSON body extractor
///
/// ```rust,ignore
/// pub async fn handler(JsonBody(request): JsonBody<LoginRequest>) { .. }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let body = req.into_body();

        let bytes = axum::body::to_bytes(body, MAX_BODY_SIZE)
            .await
            .map_err(|e| {
                tracing::warn!("Request body rejected: {}", e);
                ApiError::bad_request("Payload too large")
            })?;

        let bytes = if bytes.is_empty() {
            Bytes::from_static(b"{}")
        } else {
            bytes
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Invalid JSON body: {}", e);
            ApiError::bad_request("Invalid JSON")
        })?;

        Ok(JsonBody(value))
    }
}
