/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/v1/user/login.
 *
 * # Authentication Process
 *
 * 1. Parse the JSON payload and require email + password
 * 2. Look up the user by email
 * 3. Compare the supplied password's digest to the stored digest
 * 4. Create a session and set the `sessionId` cookie
 * 5. Return the user profile
 *
 * # Security
 *
 * - Unknown email and wrong password produce the identical 401 response,
 *   so the endpoint cannot be used to enumerate accounts
 * - The session cookie is `HttpOnly; Path=/; SameSite=Lax` with no expiry
 *   attribute, lasting for the browser session
 * - Passwords and digests never appear in responses or logs
 */

use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sqlx::PgPool;

use crate::auth::handlers::types::{ApiResponse, LoginRequest, UserData};
use crate::auth::password::verify_password;
use crate::auth::sessions::SessionStore;
use crate::auth::users::find_by_email;
use crate::error::ApiError;
use crate::middleware::json_body::JsonBody;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "sessionId";

/// Login handler
///
/// Verifies the credentials and, on success, creates a session in the
/// store and returns it to the browser as a `sessionId` cookie alongside
/// the user profile.
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(sessions): State<SessionStore>,
    jar: CookieJar,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserData>>), ApiError> {
    let (Some(email), Some(password)) = (
        request.email.filter(|e| !e.is_empty()),
        request.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Email and password are required"));
    };

    tracing::info!("Login request for: {}", email);

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::internal("Failed to login")
    })?;

    let user = find_by_email(&pool, &email)
        .await
        .map_err(|e| ApiError::database("Failed to login", e))?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            ApiError::unauthorized("Invalid credentials")
        })?;

    if !verify_password(&password, &user.password_hash) {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = sessions.create(user.user_id);

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .build();

    tracing::info!("User logged in successfully: {} ({})", user.username, email);

    Ok((
        jar.add(cookie),
        Json(ApiResponse::success(
            "Login successful",
            UserData {
                user_id: user.user_id,
                username: user.username,
                email: user.email,
                phone: user.phone,
            },
        )),
    ))
}
