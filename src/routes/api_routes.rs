/**
 * API Route Registration
 *
 * This module registers the versioned API endpoints:
 *
 * - `POST /api/v1/user/registration` - User registration
 * - `POST /api/v1/user/login` - User login
 * - `GET /api/v1/user-info` - Current user lookup (session cookie)
 *
 * Registration and login are public; user-info requires the `sessionId`
 * cookie set by login and is checked inside the handler.
 */

use axum::Router;

use crate::auth::{login, register, user_info};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/v1/user/registration",
            axum::routing::post(register),
        )
        .route(
            "/api/v1/user/login",
            axum::routing::post(login),
        )
        .route(
            "/api/v1/user-info",
            axum::routing::get(user_info),
        )
}
