//! Handlers for the `/sales` resource.
//!
//! Checkout is the busiest write path in the API: one request produces the
//! sale row, a `create_sale` and a `process_payment` event, and a low-stock
//! alert for every sold product the decrement pushed to its reorder point.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::inventory::is_low_stock;
use storefront_db::models::activity_event::CreateActivityEvent;
use storefront_db::models::sale::{CreateSale, Sale, SaleWithItems};
use storefront_db::repositories::{ProductRepo, SaleRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/sales
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Sale>>> {
    let sales = SaleRepo::list(&state.pool, auth.shop_id, params.limit.unwrap_or(50)).await?;
    Ok(Json(sales))
}

/// POST /api/v1/sales
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateSale>,
) -> AppResult<(StatusCode, Json<SaleWithItems>)> {
    let sale = SaleRepo::create(&state.pool, auth.shop_id, Some(auth.user_id), &input).await?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::CREATE_SALE)
                .with_actor(auth.user_id)
                .with_entity("sales", sale.sale.id)
                .with_metadata(json!({
                    "order_number": sale.sale.order_number.as_str(),
                    "total_cents": sale.sale.total_cents,
                    "item_count": sale.items.len(),
                })),
        )
        .await;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::PROCESS_PAYMENT)
                .with_actor(auth.user_id)
                .with_entity("sales", sale.sale.id)
                .with_metadata(json!({
                    "order_number": sale.sale.order_number.as_str(),
                    "payment_method": sale.sale.payment_method.as_str(),
                    "total_cents": sale.sale.total_cents,
                })),
        )
        .await;

    // The decrements may have pushed any sold product to its reorder point.
    for item in &sale.items {
        let product = ProductRepo::find_by_id(&state.pool, auth.shop_id, item.product_id).await?;
        let Some(product) = product else { continue };
        if is_low_stock(product.quantity, product.reorder_point) {
            state
                .logger
                .record(
                    CreateActivityEvent::new(auth.shop_id, action_types::LOW_STOCK_ALERT)
                        .with_entity("products", product.id)
                        .with_metadata(json!({
                            "product_id": product.id,
                            "product_name": product.name.as_str(),
                            "current_stock": product.quantity,
                            "reorder_point": product.reorder_point,
                        })),
                )
                .await;
        }
    }

    Ok((StatusCode::CREATED, Json(sale)))
}
