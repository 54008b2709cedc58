/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configuration into a single Axum router.
 *
 * # Middleware
 *
 * Two layers wrap the whole router, fallback included:
 * - CORS middleware: stamps headers on every response and answers
 *   OPTIONS with 204 before routing happens
 * - tower-http `TraceLayer`: one tracing span per request
 *
 * # Fallback
 *
 * Unmatched routes produce the API's 404 envelope rather than an empty
 * body, so clients always get `{success, message}` back.
 */

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors;
use crate::routes::api_routes::configure_api_routes;
use crate::server::health::health_check;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, session store)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health_check));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for unmatched routes
    let router = router.fallback(route_not_found);

    router
        .layer(axum::middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// 404 fallback
async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Route not found" })),
    )
}
