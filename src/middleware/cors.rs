/**
 * CORS Middleware
 *
 * This middleware attaches the CORS headers the browser front end needs
 * on every response, and answers OPTIONS requests directly with an empty
 * 204 before they reach the router.
 *
 * # Credentialed Requests
 *
 * The front end sends the session cookie cross-origin, so
 * `Access-Control-Allow-Origin` echoes the request's `Origin` header
 * rather than using a wildcard; a wildcard origin is rejected by browsers
 * whenever credentials are allowed. Requests without an `Origin` header
 * (same-origin, curl) get no origin/credentials headers.
 */

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// CORS middleware
///
/// Short-circuits OPTIONS with `204 No Content`, and stamps CORS headers
/// onto every other response on its way out.
pub async fn cors(request: Request, next: Next) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(&mut response, origin.as_ref());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(&mut response, origin.as_ref());
    response
}

fn apply_cors_headers(response: &mut Response, origin: Option<&HeaderValue>) {
    let headers = response.headers_mut();

    if let Some(origin) = origin {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,PATCH,PUT,DELETE,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,Authorization"),
    );
}
