/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses.
 *
 * # Response Format
 *
 * Error responses use the API's standard JSON envelope:
 * ```json
 * {
 *   "success": false,
 *   "message": "Error message"
 * }
 * ```
 *
 * Storage faults are logged here with full detail; the client only ever
 * receives the generic message attached to the error.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database { message, source } => {
                tracing::error!("Storage failure ({}): {:?}", message, source);
            }
            ApiError::Internal { message } => {
                tracing::error!("Internal error: {}", message);
            }
            _ => {}
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "success": false,
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiError::conflict("User already exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User already exists");
    }

    #[tokio::test]
    async fn test_database_error_is_generic() {
        let error = ApiError::database("Failed to login", sqlx::Error::PoolTimedOut);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to login");
    }
}
