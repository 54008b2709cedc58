/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Each variant
 * maps to exactly one status-code class and carries the message the
 * client is allowed to see.
 *
 * # Error Categories
 *
 * - `BadRequest` - malformed JSON, oversized body, failed validation
 * - `Unauthorized` - missing/invalid credentials or session
 * - `NotFound` - unknown route or missing user record
 * - `Conflict` - duplicate user
 * - `Database` - storage fault; client sees a generic message, the
 *   underlying `sqlx::Error` is kept for server-side logging
 * - `Internal` - any other unexpected failure
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error type
///
/// This enum represents all failures a handler can surface. Each variant
/// carries a client-facing message; the `Database` variant additionally
/// keeps its source error so the conversion layer can log it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input error (malformed body, validation failure)
    #[error("{message}")]
    BadRequest {
        /// Client-facing error message
        message: String,
    },

    /// Authentication failure (bad credentials, missing/unknown session)
    #[error("{message}")]
    Unauthorized {
        /// Client-facing error message
        message: String,
    },

    /// Missing resource (unmatched route, absent user record)
    #[error("{message}")]
    NotFound {
        /// Client-facing error message
        message: String,
    },

    /// Uniqueness conflict (user already exists)
    #[error("{message}")]
    Conflict {
        /// Client-facing error message
        message: String,
    },

    /// Storage fault surfaced as a generic infrastructure failure
    #[error("{message}")]
    Database {
        /// Client-facing generic message; never includes storage detail
        message: String,
        /// Underlying storage error, logged server-side only
        #[source]
        source: sqlx::Error,
    },

    /// Unexpected internal failure
    #[error("{message}")]
    Internal {
        /// Client-facing generic message
        message: String,
    },
}

impl ApiError {
    /// Create a new bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Wrap a storage fault with a generic client-facing message
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest` - 400
    /// - `Unauthorized` - 401
    /// - `NotFound` - 404
    /// - `Conflict` - 409
    /// - `Database` / `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Database { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("no").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("dup").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_hides_detail() {
        let error = ApiError::database("Failed to register user", sqlx::Error::PoolClosed);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Failed to register user");
        // The client-facing message never mentions the pool
        assert!(!error.message().contains("pool"));
    }

    #[test]
    fn test_error_message() {
        let error = ApiError::bad_request("Invalid email address");
        assert_eq!(error.message(), "Invalid email address");
        assert_eq!(error.to_string(), "Invalid email address");
    }
}
