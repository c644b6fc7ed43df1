//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::activity_event::CreateActivityEvent;
use storefront_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use storefront_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Customer name must not be empty".into(),
        ));
    }

    let customer = CustomerRepo::create(&state.pool, auth.shop_id, &input).await?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::CREATE_CUSTOMER)
                .with_actor(auth.user_id)
                .with_entity("customers", customer.id)
                .with_metadata(json!({
                    "name": customer.name.as_str(),
                    "email": customer.email.as_deref(),
                })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/v1/customers
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool, auth.shop_id).await?;
    Ok(Json(customers))
}

/// PUT /api/v1/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::update(&state.pool, auth.shop_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::UPDATE_CUSTOMER)
                .with_actor(auth.user_id)
                .with_entity("customers", customer.id)
                .with_metadata(json!({
                    "name": customer.name.as_str(),
                    "email": customer.email.as_deref(),
                })),
        )
        .await;

    Ok(Json(customer))
}

/// DELETE /api/v1/customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Fetch first so the deletion event can name what was removed.
    let customer = CustomerRepo::find_by_id(&state.pool, auth.shop_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;

    let deleted = CustomerRepo::delete(&state.pool, auth.shop_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }));
    }

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::DELETE_CUSTOMER)
                .with_actor(auth.user_id)
                .with_entity("customers", id)
                .with_metadata(json!({
                    "name": customer.name.as_str(),
                    "email": customer.email.as_deref(),
                })),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}
