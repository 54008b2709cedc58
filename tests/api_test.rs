//! API integration tests
//!
//! Black-box tests for the HTTP surface: routing, CORS, body handling,
//! validation, and session checks. These run against an app with no
//! database configured, which also proves that input validation and
//! session resolution happen before any storage access.
//!
//! The tests at the bottom exercise the full register -> login ->
//! user-info round-trip and need a real PostgreSQL database; they are
//! `#[ignore]`d so the default suite stays hermetic. Run them with
//! `DATABASE_URL` set and `cargo test -- --ignored`.

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use cityboard::auth::sessions::SessionStore;
use cityboard::routes::create_router;
use cityboard::server::state::AppState;

/// Build a test server with no database behind it.
fn create_test_server() -> TestServer {
    let app_state = AppState {
        db_pool: None,
        sessions: SessionStore::new(),
    };
    TestServer::new(create_router(app_state)).unwrap()
}

#[tokio::test]
async fn test_unknown_route_returns_envelope_404() {
    let server = create_test_server();

    let response = server.get("/api/v1/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn test_options_returns_204_with_no_body() {
    let server = create_test_server();

    let response = server
        .method(Method::OPTIONS, "/api/v1/user/login")
        .add_header("Origin", "http://localhost:5173")
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_cors_echoes_origin_with_credentials() {
    let server = create_test_server();

    let response = server
        .get("/health")
        .add_header("Origin", "https://classifieds.example")
        .await;

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "https://classifieds.example"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_no_origin_no_allow_origin_header() {
    let server = create_test_server();

    let response = server.get("/health").await;

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_health_without_database() {
    let server = create_test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_registration_missing_fields() {
    let server = create_test_server();

    // No database is configured, so a 400 here proves validation runs
    // before any storage access.
    let response = server
        .post("/api/v1/user/registration")
        .json(&json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_registration_empty_body_counts_as_missing_fields() {
    let server = create_test_server();

    let response = server.post("/api/v1/user/registration").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_registration_invalid_email() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/user/registration")
        .json(&json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "secret1",
            "confirmPassword": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid email address");
}

#[tokio::test]
async fn test_registration_invalid_phone() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/user/registration")
        .json(&json!({
            "username": "alice",
            "email": "a@b.com",
            "phone": "12",
            "password": "secret1",
            "confirmPassword": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid phone number");
}

#[tokio::test]
async fn test_registration_password_mismatch() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/user/registration")
        .json(&json!({
            "username": "alice",
            "email": "a@b.com",
            "password": "secret1",
            "confirmPassword": "secret2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Passwords do not match");
}

#[tokio::test]
async fn test_registration_short_password() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/user/registration")
        .json(&json!({
            "username": "alice",
            "email": "a@b.com",
            "password": "abc12",
            "confirmPassword": "abc12"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Password must be at least 6 characters long");
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/user/registration")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid JSON");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let server = create_test_server();

    // Just past the 1 MiB ceiling.
    let padding = "x".repeat(1024 * 1024 + 1);
    let response = server
        .post("/api/v1/user/registration")
        .text(padding)
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Payload too large");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/user/login")
        .json(&json!({ "email": "a@b.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_user_info_without_cookie() {
    let server = create_test_server();

    let response = server.get("/api/v1/user-info").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Not authenticated");
}

#[tokio::test]
async fn test_user_info_with_unknown_session() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/user-info")
        .add_header("Cookie", "sessionId=definitely-not-issued")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid session");
}

// ---------------------------------------------------------------------
// Storage-backed round-trip tests. Require DATABASE_URL pointing at a
// migrated PostgreSQL instance; run with `cargo test -- --ignored`.
// ---------------------------------------------------------------------

mod with_database {
    use super::*;
    use cityboard::server::init::create_app;

    async fn create_db_server() -> TestServer {
        let app = create_app().await;
        TestServer::new(app).unwrap()
    }

    /// Unique credentials per test run so reruns do not collide.
    fn fresh_user() -> (String, String) {
        let tag = uuid::Uuid::new_v4().simple().to_string();
        (format!("user_{tag}"), format!("{tag}@example.com"))
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_register_login_user_info_round_trip() {
        let server = create_db_server().await;
        let (username, email) = fresh_user();

        // Register
        let response = server
            .post("/api/v1/user/registration")
            .json(&json!({
                "username": username,
                "email": email,
                "phone": "(212) 555-0100",
                "password": "secret1",
                "confirmPassword": "secret1"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Registration successful");
        assert_eq!(body["data"]["username"], username.as_str());
        assert!(body["data"]["userId"].is_i64());
        assert!(body["data"]["createdAt"].is_string());
        assert!(body["data"].get("password").is_none());
        let user_id = body["data"]["userId"].as_i64().unwrap();

        // Login with the same credentials
        let response = server
            .post("/api/v1/user/login")
            .json(&json!({ "email": email, "password": "secret1" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let set_cookie = response
            .headers()
            .get("set-cookie")
            .expect("login sets the session cookie")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("sessionId="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Path=/"));
        assert!(set_cookie.contains("SameSite=Lax"));

        let body: Value = response.json();
        assert_eq!(body["data"]["userId"], user_id);

        // Present the cookie to the user-info endpoint
        let cookie_pair = set_cookie.split(';').next().unwrap().to_string();
        let response = server
            .get("/api/v1/user-info")
            .add_header("Cookie", cookie_pair)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["userId"], user_id);
        assert_eq!(body["data"]["username"], username.as_str());
        assert_eq!(body["data"]["email"], email.as_str());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_duplicate_registration_conflicts() {
        let server = create_db_server().await;
        let (username, email) = fresh_user();

        let payload = json!({
            "username": username,
            "email": email,
            "password": "secret1",
            "confirmPassword": "secret1"
        });

        let first = server.post("/api/v1/user/registration").json(&payload).await;
        assert_eq!(first.status_code(), StatusCode::CREATED);

        let second = server.post("/api/v1/user/registration").json(&payload).await;
        assert_eq!(second.status_code(), StatusCode::CONFLICT);
        let body: Value = second.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User already exists");
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_login_failures_are_indistinguishable() {
        let server = create_db_server().await;
        let (username, email) = fresh_user();

        let response = server
            .post("/api/v1/user/registration")
            .json(&json!({
                "username": username,
                "email": email,
                "password": "secret1",
                "confirmPassword": "secret1"
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        // Wrong password
        let wrong_password = server
            .post("/api/v1/user/login")
            .json(&json!({ "email": email, "password": "wrong" }))
            .await;
        assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);

        // Unknown email
        let unknown_email = server
            .post("/api/v1/user/login")
            .json(&json!({ "email": "nobody@example.com", "password": "secret1" }))
            .await;
        assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

        // Same message either way
        let a: Value = wrong_password.json();
        let b: Value = unknown_email.json();
        assert_eq!(a["message"], "Invalid credentials");
        assert_eq!(a["message"], b["message"]);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_health_with_database() {
        let server = create_db_server().await;

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
