//! Route definitions for the `/suppliers` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::suppliers;
use crate::state::AppState;

/// Routes mounted at `/suppliers`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(suppliers::list).post(suppliers::create))
        .route("/{id}", put(suppliers::update).delete(suppliers::delete))
}
