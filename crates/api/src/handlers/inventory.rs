//! Handlers for inventory alerting (low-stock listing and the scan trigger).

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use storefront_db::models::product::Product;
use storefront_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a low-stock sweep.
#[derive(Debug, Serialize)]
pub struct ScanResult {
    /// Number of `low_stock_alert` events emitted by this sweep.
    pub emitted: u32,
}

/// GET /api/v1/inventory/low-stock
///
/// The shop's active products currently at or below their reorder point.
pub async fn low_stock(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = ProductRepo::low_stock(&state.pool, auth.shop_id).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/inventory/low-stock/scan
///
/// Run the low-stock sweep for the shop now. Every product below threshold
/// gets a fresh alert event; repeated sweeps over unchanged stock emit
/// duplicates.
pub async fn scan(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<ScanResult>>> {
    let emitted = state.scanner.scan(auth.shop_id).await?;
    Ok(Json(DataResponse {
        data: ScanResult { emitted },
    }))
}
