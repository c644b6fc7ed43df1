//! Handlers for the `/suppliers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::activity_event::CreateActivityEvent;
use storefront_db::models::supplier::{CreateSupplier, Supplier, UpdateSupplier};
use storefront_db::repositories::SupplierRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/suppliers
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateSupplier>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Supplier name must not be empty".into(),
        ));
    }

    let supplier = SupplierRepo::create(&state.pool, auth.shop_id, &input).await?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::CREATE_SUPPLIER)
                .with_actor(auth.user_id)
                .with_entity("suppliers", supplier.id)
                .with_metadata(json!({
                    "name": supplier.name.as_str(),
                    "company_name": supplier.company_name.as_deref(),
                })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(supplier)))
}

/// GET /api/v1/suppliers
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = SupplierRepo::list(&state.pool, auth.shop_id).await?;
    Ok(Json(suppliers))
}

/// PUT /api/v1/suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupplier>,
) -> AppResult<Json<Supplier>> {
    let supplier = SupplierRepo::update(&state.pool, auth.shop_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }))?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::UPDATE_SUPPLIER)
                .with_actor(auth.user_id)
                .with_entity("suppliers", supplier.id)
                .with_metadata(json!({
                    "name": supplier.name.as_str(),
                    "company_name": supplier.company_name.as_deref(),
                })),
        )
        .await;

    Ok(Json(supplier))
}

/// DELETE /api/v1/suppliers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Fetch first so the deletion event can name what was removed.
    let supplier = SupplierRepo::find_by_id(&state.pool, auth.shop_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }))?;

    let deleted = SupplierRepo::delete(&state.pool, auth.shop_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }));
    }

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::DELETE_SUPPLIER)
                .with_actor(auth.user_id)
                .with_entity("suppliers", id)
                .with_metadata(json!({
                    "name": supplier.name.as_str(),
                    "company_name": supplier.company_name.as_deref(),
                })),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}
