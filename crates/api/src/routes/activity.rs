//! Route definitions for the `/activity` resource.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activity`.
///
/// ```text
/// GET /        -> feed    (?category=&window=&limit=&offset=)
/// GET /export  -> export  (?from=&to=, returns CSV)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity::feed))
        .route("/export", get(activity::export))
}
