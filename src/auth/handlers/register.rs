/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/user/registration.
 *
 * # Registration Process
 *
 * 1. Parse and validate the JSON payload (before any storage access)
 * 2. Check whether the email or username is already taken
 * 3. Digest the password
 * 4. Insert the user row
 * 5. Return the new profile with the storage-assigned id
 *
 * # Security
 *
 * - Passwords are digested before storage and never returned
 * - Uniqueness is also enforced by database constraints, so two racing
 *   registrations cannot both succeed; the loser gets the same 409 as a
 *   straightforward duplicate
 *
 * # Errors
 *
 * * `400 Bad Request` - malformed body or failed validation, with the
 *   specific message
 * * `409 Conflict` - email or username already registered
 * * `500 Internal Server Error` - storage fault (generic message, detail
 *   logged server-side)
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{ApiResponse, RegisterRequest, RegisteredUser};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, find_by_email_or_username, is_unique_violation};
use crate::auth::validation::validate_registration;
use crate::error::ApiError;
use crate::middleware::json_body::JsonBody;

/// Registration handler
///
/// Validates the payload, rejects duplicates, digests the password, and
/// inserts the user. Validation runs before the pool is touched, so field
/// errors are reported even when storage is down.
pub async fn register(
    State(pool): State<Option<PgPool>>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisteredUser>>), ApiError> {
    let data = validate_registration(&request).map_err(ApiError::bad_request)?;

    tracing::info!(
        "Registration request for username: {}, email: {}",
        data.username,
        data.email
    );

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::internal("Failed to register user")
    })?;

    // Check if a user already holds this email or username
    let existing = find_by_email_or_username(&pool, &data.email, &data.username)
        .await
        .map_err(|e| ApiError::database("Failed to register user", e))?;

    if existing.is_some() {
        tracing::warn!("User already exists: {}", data.email);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash_password(&data.password);

    // Insert; the unique constraints close the race the existence check
    // leaves open.
    let new_user = create_user(
        &pool,
        &data.username,
        &password_hash,
        data.phone.as_deref(),
        &data.email,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            tracing::warn!("Concurrent duplicate registration: {}", data.email);
            ApiError::conflict("User already exists")
        } else {
            ApiError::database("Failed to register user", e)
        }
    })?;

    tracing::info!(
        "User created successfully: {} ({})",
        data.username,
        data.email
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Registration successful",
            RegisteredUser {
                user_id: new_user.user_id,
                username: data.username,
                email: data.email,
                phone: data.phone,
                created_at: new_user.created_at,
            },
        )),
    ))
}
