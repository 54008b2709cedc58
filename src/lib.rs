//! Cityboard - Classifieds Backend
//!
//! Cityboard is the backend API for a small regional classifieds website.
//! It provides user registration, login, and session-based identity lookup
//! over a PostgreSQL `users` table, plus a storage-aware health endpoint.
//!
//! # Overview
//!
//! The crate exposes a complete Axum HTTP server:
//! - JSON API for registration, login, and "who am I" lookup
//! - In-memory session store keyed by opaque cookie tokens
//! - Parameterized PostgreSQL access through sqlx
//! - CORS support for the credentialed browser front end
//!
//! # Module Structure
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - CORS and request-body middleware
//! - **`auth`** - Validation, password digests, sessions, users, handlers
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use cityboard::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All shared state is designed for concurrent access: the database pool is
//! internally synchronized, and the session store wraps its map in
//! `Arc<RwLock<..>>` so in-flight requests never observe a torn entry.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Request-processing middleware
pub mod middleware;

/// Authentication and user management
pub mod auth;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
