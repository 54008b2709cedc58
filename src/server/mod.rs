//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── state.rs   - AppState and FromRef implementations
//! ├── config.rs  - Configuration loading (database)
//! ├── init.rs    - Server initialization and app creation
//! └── health.rs  - Health check handler
//! ```
//!
//! # State Management
//!
//! The server uses `AppState` as the central state container, holding the
//! optional database pool and the in-memory session store. State is cloned
//! cheaply across handlers; `FromRef` implementations let handlers extract
//! only the parts they need.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Health check endpoint
pub mod health;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
