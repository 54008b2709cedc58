/**
 * Health Check Handler
 *
 * This module implements the handler for GET /health, which reports
 * whether the server can reach its storage backend.
 *
 * # Response
 *
 * - `200 {"status":"ok"}` when a pooled database connection can be
 *   acquired
 * - `500 {"status":"error","message":...}` when the database is
 *   unconfigured or unreachable
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};
use sqlx::PgPool;

/// Health check handler
///
/// Acquires (and immediately releases) a database connection from the pool
/// to verify the storage backend is reachable.
pub async fn health_check(
    State(pool): State<Option<PgPool>>,
) -> (StatusCode, Json<Value>) {
    let Some(pool) = pool else {
        tracing::warn!("Health check failed: database not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": "error", "message": "Database connection failed" })),
        );
    };

    match pool.acquire().await {
        Ok(_connection) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            tracing::error!("Health check failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": "Database connection failed" })),
            )
        }
    }
}
