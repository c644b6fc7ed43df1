//! Route definitions for the `/inventory` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Routes mounted at `/inventory`.
///
/// ```text
/// GET  /low-stock       -> low_stock
/// POST /low-stock/scan  -> scan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/low-stock", get(inventory::low_stock))
        .route("/low-stock/scan", post(inventory::scan))
}
