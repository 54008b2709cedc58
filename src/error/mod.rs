//! API Error Module
//!
//! This module defines the error taxonomy used by HTTP handlers and the
//! conversion of those errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return it
//! directly. Every error renders as the standard JSON envelope
//! `{"success": false, "message": ...}` with the appropriate status code.
//! Internal detail (database errors) is logged server-side and never
//! reaches the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
