//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint registration
//! ```
//!
//! # Route Surface
//!
//! - `GET /health` - Storage-aware health check
//! - `POST /api/v1/user/registration` - User registration
//! - `POST /api/v1/user/login` - User login
//! - `GET /api/v1/user-info` - Current user lookup
//! - `OPTIONS *` - 204 (handled by the CORS middleware)
//! - anything else - 404 JSON envelope

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
