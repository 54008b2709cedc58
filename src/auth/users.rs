/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Every operation
 * is a single parameterized query; arguments are always bound, never
 * interpolated into SQL.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing a full row in the database
///
/// Includes the password digest, so this type is only used for credential
/// checks and is never serialized into a response body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (assigned by storage on insert)
    pub user_id: i64,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Phone number, if provided at registration
    pub phone: Option<String>,
    /// Stored password digest (SHA-256 hex)
    pub password_hash: String,
}

/// User profile without credential material
///
/// Returned by id lookups for info responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Storage-assigned fields of a freshly inserted user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NewUser {
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Check whether a user exists with the given email or username
///
/// Existence check only; returns the first matching id, if any.
pub async fn find_by_email_or_username(
    pool: &PgPool,
    email: &str,
    username: &str,
) -> Result<Option<i64>, sqlx::Error> {
    let user_id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT user_id
        FROM users
        WHERE email = $1 OR username = $2
        LIMIT 1
        "#,
    )
    .bind(email)
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user_id)
}

/// Insert a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Chosen username
/// * `password_hash` - Password digest (never plaintext)
/// * `phone` - Normalized phone number, if any
/// * `email` - Email address
///
/// # Returns
/// The storage-assigned id and creation timestamp. A unique-constraint
/// violation on `username`/`email` surfaces as `sqlx::Error::Database`;
/// callers map it to the duplicate-user case.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    phone: Option<&str>,
    email: &str,
) -> Result<NewUser, sqlx::Error> {
    let user = sqlx::query_as::<_, NewUser>(
        r#"
        INSERT INTO users (username, password, phone, email)
        VALUES ($1, $2, $3, $4)
        RETURNING user_id, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(phone)
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get a user by email, including the stored password digest
///
/// # Returns
/// User or None if not found
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, username, email, phone, password AS password_hash
        FROM users
        WHERE email = $1
        LIMIT 1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user profile by id, excluding credential material
///
/// # Returns
/// UserProfile or None if not found
pub async fn find_by_id(pool: &PgPool, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    let user = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT user_id, username, email, phone
        FROM users
        WHERE user_id = $1
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a storage error is a unique-constraint violation
///
/// Used to map a duplicate insert to the conflict response when two
/// registrations race past the existence check.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
