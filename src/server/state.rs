/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application, holding:
 * - The optional PostgreSQL connection pool
 * - The in-memory session store
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `PgPool` is internally synchronized and cheap to clone
 * - `SessionStore` wraps its map in `Arc<RwLock<..>>`
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`, following
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::SessionStore;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - Optional PostgreSQL database connection pool. `None` if
///   the database is not configured (e.g. `DATABASE_URL` is unset).
///   Handlers check for `None` before using the database.
/// * `sessions` - In-memory session store mapping opaque tokens to
///   logged-in users. Owned here and handed to handlers by reference,
///   never a process global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: Option<PgPool>,

    /// Session store for logged-in users
    pub sessions: SessionStore,
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for SessionStore
///
/// This allows Axum handlers to extract the session store directly
/// from `AppState`.
impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
