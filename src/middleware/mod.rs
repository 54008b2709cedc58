//! Middleware Module
//!
//! Request-processing middleware shared by every route.
//!
//! # Module Structure
//!
//! ```text
//! middleware/
//! ├── mod.rs       - Module exports and documentation
//! ├── cors.rs      - CORS headers and OPTIONS preflight handling
//! └── json_body.rs - Size-capped JSON body extractor
//! ```

/// CORS headers and preflight handling
pub mod cors;

/// Size-capped JSON body extraction
pub mod json_body;

// Re-export commonly used items
pub use cors::cors;
pub use json_body::JsonBody;
