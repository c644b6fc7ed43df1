//! Route definitions for the `/notifications` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET /  -> list  (?page=&page_size=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(notifications::list))
}
