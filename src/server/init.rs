/**
 * Server Initialization
 *
 * This module handles initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database)
 * 2. Create the session store
 * 3. Assemble application state
 * 4. Create and configure the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing or unreachable database is logged
 * and the server starts without it.
 */

use axum::Router;

use crate::auth::sessions::SessionStore;
use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Database connection pool (if configured)
/// - A fresh in-memory session store
/// - Route configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing cityboard backend server");

    // Step 1: Load optional services
    let db_pool = load_database().await;

    // Step 2: Create the session store
    // Sessions live in process memory for the lifetime of the server.
    let sessions = SessionStore::new();

    // Step 3: Create app state
    let app_state = AppState { db_pool, sessions };

    // Step 4: Create router with all routes
    create_router(app_state)
}
