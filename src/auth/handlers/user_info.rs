/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/v1/user-info, which
 * returns the profile of the currently logged-in user.
 *
 * # Authentication
 *
 * The endpoint is authenticated by the `sessionId` cookie set at login.
 * The cookie value is resolved through the in-memory session store; the
 * user row is then fetched by id.
 *
 * # Errors
 *
 * * `401 Unauthorized` - no cookie ("Not authenticated") or a token the
 *   store does not know ("Invalid session")
 * * `404 Not Found` - session resolves to a user id with no row
 * * `500 Internal Server Error` - storage fault
 */

use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::CookieJar;
use sqlx::PgPool;

use crate::auth::handlers::login::SESSION_COOKIE;
use crate::auth::handlers::types::{ApiResponse, UserData};
use crate::auth::sessions::SessionStore;
use crate::auth::users::find_by_id;
use crate::error::ApiError;

/// Current user handler
///
/// Resolves the session cookie to a user id and returns that user's
/// profile, without credential material.
pub async fn user_info(
    State(pool): State<Option<PgPool>>,
    State(sessions): State<SessionStore>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<UserData>>, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

    let user_id = sessions.lookup(&token).ok_or_else(|| {
        tracing::warn!("Unknown session token presented");
        ApiError::unauthorized("Invalid session")
    })?;

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::internal("Failed to fetch user info")
    })?;

    let profile = find_by_id(&pool, user_id)
        .await
        .map_err(|e| ApiError::database("Failed to fetch user info", e))?
        .ok_or_else(|| {
            tracing::warn!("Session for missing user: {}", user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(ApiResponse::success(
        "User info fetched",
        UserData::from(profile),
    )))
}
