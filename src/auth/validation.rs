/**
 * Registration Payload Validation
 *
 * This module validates registration requests before any storage access.
 * Checks run in a fixed order and the first violated rule decides the
 * error message, so the client always sees a single, specific failure.
 *
 * # Rules
 *
 * 1. `username`, `email`, `password`, `confirmPassword` present and
 *    non-empty
 * 2. `email` shaped like `X@Y.Z` (no whitespace or extra `@`)
 * 3. `phone`, when given, is 7-20 characters of digits, parentheses,
 *    `+`, `-`, or whitespace
 * 4. `password` equals `confirmPassword`
 * 5. `password` is at least 6 characters
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::auth::handlers::types::RegisterRequest;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9()+\-\s]{7,20}$").expect("valid phone regex"));

/// A registration payload that passed validation
///
/// Field presence is guaranteed and the phone number is normalized:
/// trimmed, with an empty result treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationData {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

/// Validate a registration request
///
/// Returns the normalized payload, or the client-facing message for the
/// first violated rule. Pure: no storage access, no side effects.
pub fn validate_registration(request: &RegisterRequest) -> Result<RegistrationData, String> {
    let username = non_empty(&request.username);
    let email = non_empty(&request.email);
    let password = non_empty(&request.password);
    let confirm_password = non_empty(&request.confirm_password);

    let (Some(username), Some(email), Some(password), Some(confirm_password)) =
        (username, email, password, confirm_password)
    else {
        return Err("All fields are required".to_string());
    };

    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email address".to_string());
    }

    if let Some(phone) = non_empty(&request.phone) {
        if !PHONE_REGEX.is_match(phone) {
            return Err("Invalid phone number".to_string());
        }
    }

    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }

    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    // Normalize the phone number: trim it, and treat whitespace-only
    // values as absent.
    let phone = request
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Ok(RegistrationData {
        username: username.to_string(),
        email: email.to_string(),
        phone,
        password: password.to_string(),
    })
}

/// Treat missing and empty fields the same way
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
