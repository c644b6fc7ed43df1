//! Handlers for the `/products` resource, including the stock-adjustment
//! endpoint that feeds the inventory alerting pipeline.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::error::CoreError;
use storefront_core::inventory::is_low_stock;
use storefront_core::types::DbId;
use storefront_db::models::activity_event::CreateActivityEvent;
use storefront_db::models::product::{CreateProduct, Product, UpdateProduct};
use storefront_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /products/{id}/stock`.
#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    /// New absolute stock level for the product.
    pub quantity: i32,
}

fn validate_create(input: &CreateProduct) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Product name must not be empty".into()));
    }
    if input.price_cents < 0 {
        return Err(AppError::BadRequest("Price must not be negative".into()));
    }
    if input.quantity < 0 || input.reorder_point < 0 {
        return Err(AppError::BadRequest(
            "Stock levels must not be negative".into(),
        ));
    }
    Ok(())
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_create(&input)?;

    let product = ProductRepo::create(&state.pool, auth.shop_id, &input).await?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::PRODUCT_CREATED)
                .with_actor(auth.user_id)
                .with_entity("products", product.id)
                .with_metadata(json!({
                    "product_id": product.id,
                    "product_name": product.name.as_str(),
                    "sku": product.sku.as_deref(),
                })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool, auth.shop_id).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, auth.shop_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::update(&state.pool, auth.shop_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::PRODUCT_UPDATED)
                .with_actor(auth.user_id)
                .with_entity("products", product.id)
                .with_metadata(json!({
                    "product_id": product.id,
                    "product_name": product.name.as_str(),
                    "sku": product.sku.as_deref(),
                })),
        )
        .await;

    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
///
/// A product already referenced by sale line items cannot be removed; the
/// foreign key maps to 409.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Fetch first so the deletion event can name what was removed.
    let product = ProductRepo::find_by_id(&state.pool, auth.shop_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let deleted = ProductRepo::delete(&state.pool, auth.shop_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::PRODUCT_DELETED)
                .with_actor(auth.user_id)
                .with_entity("products", id)
                .with_metadata(json!({
                    "product_id": id,
                    "product_name": product.name.as_str(),
                    "sku": product.sku.as_deref(),
                })),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/products/{id}/stock
///
/// Set a product's stock level. Emits `stock_adjusted`, then checks the new
/// level against the reorder point so a threshold crossing surfaces
/// immediately instead of waiting for the next sweep.
pub async fn adjust_stock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AdjustStockRequest>,
) -> AppResult<Json<Product>> {
    if input.quantity < 0 {
        return Err(AppError::BadRequest(
            "Stock level must not be negative".into(),
        ));
    }

    let product = ProductRepo::set_quantity(&state.pool, auth.shop_id, id, input.quantity)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::STOCK_ADJUSTED)
                .with_actor(auth.user_id)
                .with_entity("products", product.id)
                .with_metadata(json!({
                    "product_id": product.id,
                    "product_name": product.name.as_str(),
                    "new_stock": product.quantity,
                })),
        )
        .await;

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

    Ok(Json(product))
}
