//! Authentication Module
//!
//! This module handles user registration, login, and session management.
//! It provides the HTTP handlers for the authentication endpoints along
//! with the pieces they orchestrate.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── validation.rs   - Registration payload validation
//! ├── password.rs     - Password digest computation
//! ├── sessions.rs     - In-memory session store
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── user_info.rs - Current user lookup handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: payload validated → uniqueness checked → password
//!    digested → row inserted → profile returned
//! 2. **Login**: credentials verified against the stored digest → session
//!    created → `sessionId` cookie set → profile returned
//! 3. **User info**: `sessionId` cookie resolved through the session
//!    store → user row fetched → profile returned
//!
//! # Security
//!
//! - Password digests are stored, never plaintext; digests never appear
//!   in responses
//! - Login failures are indistinguishable between unknown email and wrong
//!   password
//! - Session tokens are opaque UUIDs held server-side only

/// Registration payload validation
pub mod validation;

/// Password digest computation
pub mod password;

/// In-memory session store
pub mod sessions;

/// User data model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register, user_info};
pub use sessions::SessionStore;
