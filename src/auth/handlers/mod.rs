//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication
//! endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/user/registration - User registration
//! - **`login`** - POST /api/v1/user/login - User authentication
//! - **`user_info`** - GET /api/v1/user-info - Current user lookup
//!
//! # Response Envelope
//!
//! Every endpoint answers with the same JSON envelope:
//! `{"success": bool, "message": string, "data": object?}`. Failures are
//! produced by [`crate::error::ApiError`] and carry no `data` field.

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user lookup handler
pub mod user_info;

// Re-export commonly used types
pub use types::{ApiResponse, LoginRequest, RegisterRequest, RegisteredUser, UserData};

// Re-export handlers
pub use login::login;
pub use register::register;
pub use user_info::user_info;
