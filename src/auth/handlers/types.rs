/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers, plus the JSON envelope every endpoint wraps
 * its payload in.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::UserProfile;

/// Registration request
///
/// All fields are optional at the wire level so that missing and empty
/// values can share the validator's "All fields are required" response
/// instead of failing deserialization.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User's chosen username
    #[serde(default)]
    pub username: Option<String>,
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// Optional phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// User's password (digested before storage)
    #[serde(default)]
    pub password: Option<String>,
    /// Confirmation copy of the password
    #[serde(default)]
    pub confirm_password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// Registered email address
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password (verified against the stored digest)
    #[serde(default)]
    pub password: Option<String>,
}

/// Standard response envelope
///
/// Success responses carry a payload in `data`; error responses (built by
/// the error conversion layer) omit it.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope around a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Registration response payload
///
/// The freshly registered user, including the storage-assigned id and
/// creation timestamp. The password digest is never included.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User payload for login and user-info responses
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<UserProfile> for UserData {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            username: profile.username,
            email: profile.email,
            phone: profile.phone,
        }
    }
}
