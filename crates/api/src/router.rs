//! Application router assembly.
//!
//! [`build_app_router`] is the single place the route tree meets the
//! middleware stack. The binary and the integration tests both call it, so
//! a request travels the same layers in production and under test.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assemble the route tree and wrap it in the middleware stack.
///
/// Outermost to innermost: CORS, request-id stamping, request tracing,
/// request-id propagation onto the response, timeout, panic recovery.
/// Stamping must run before propagation sees the request, or responses
/// would leave without an id.
pub fn build_app_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        // Probes hit /health without the /api/v1 prefix.
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(middleware)
        // CORS rides its own `layer` call, added last so it stays outermost.
        // Inside the ServiceBuilder it would sit directly on the timeout
        // layer's response body, which lacks the `Default` that Cors needs
        // to mint preflight responses; the router boundary re-boxes to
        // `axum::body::Body`, which has it.
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// CORS for the browser dashboard. Panics on a malformed origin so a bad
/// `CORS_ORIGINS` value stops the server at startup instead of silently
/// locking the dashboard out.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        // The dashboard sends bearer tokens, so preflight must clear
        // the Authorization header.
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
