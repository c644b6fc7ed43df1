use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use storefront_activity::{ActivityLogger, LowStockScanner};
use storefront_api::auth::jwt::{generate_access_token, JwtConfig};
use storefront_api::auth::password::hash_password;
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_core::types::DbId;
use storefront_db::models::shop::CreateShop;
use storefront_db::models::user::CreateUser;
use storefront_db::repositories::{ShopRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret so tests can mint
/// their own tokens.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-signing-secret-42".to_string(),
            access_token_expiry_mins: 480,
        },
    }
}

/// Build the shared [`AppState`] over the given pool.
///
/// Exposed separately from [`test_app`] so tests that need to inspect
/// state directly (e.g. the activity logger's dropped-event counter) can
/// hold a clone of it alongside the router.
pub fn test_state(pool: PgPool) -> AppState {
    let logger = Arc::new(ActivityLogger::new(pool.clone()));
    let scanner = Arc::new(LowStockScanner::new(pool.clone(), Arc::clone(&logger)));

    AppState {
        pool,
        config: Arc::new(test_config()),
        logger,
        scanner,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to the same `build_app_router` that `main.rs` uses so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery).
pub fn test_app(pool: PgPool) -> Router {
    build_app_router(test_state(pool))
}

// ---------------------------------------------------------------------------
// Seeded fixtures
// ---------------------------------------------------------------------------

/// A seeded shop plus one staff member with a ready-to-use access token.
pub struct TestStaff {
    pub shop_id: DbId,
    pub user_id: DbId,
    pub token: String,
}

/// Fixed plaintext password for every seeded test user.
pub const TEST_PASSWORD: &str = "till-drawer-hunter2";

/// Create a shop and one active staff user, then mint an access token for
/// them directly (no login request), so the activity log stays empty until
/// the test itself writes to it.
///
/// Usernames are unique across shops, so multi-shop tests must pass a
/// distinct `username` per call.
pub async fn seed_staff(pool: &PgPool, shop_name: &str, username: &str) -> TestStaff {
    let shop = ShopRepo::create(
        pool,
        &CreateShop {
            name: shop_name.to_string(),
            address: None,
            phone: None,
        },
    )
    .await
    .expect("shop creation should succeed");

    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            shop_id: shop.id,
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: hashed,
            role: "staff".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, shop.id, &user.role, None, &test_config().jwt)
        .expect("token generation should succeed");

    TestStaff {
        shop_id: shop.id,
        user_id: user.id,
        token,
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body as a UTF-8 string (for CSV exports).
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be valid UTF-8")
}
