//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::activity_event::CreateActivityEvent;
use storefront_db::models::category::{Category, CreateCategory, UpdateCategory};
use storefront_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Category name must not be empty".into(),
        ));
    }

    let category = CategoryRepo::create(&state.pool, auth.shop_id, &input).await?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::CREATE_CATEGORY)
                .with_actor(auth.user_id)
                .with_entity("categories", category.id)
                .with_metadata(json!({ "name": category.name.as_str() })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool, auth.shop_id).await?;
    Ok(Json(categories))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, auth.shop_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::UPDATE_CATEGORY)
                .with_actor(auth.user_id)
                .with_entity("categories", category.id)
                .with_metadata(json!({ "name": category.name.as_str() })),
        )
        .await;

    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Fetch first so the deletion event can name what was removed.
    let category = CategoryRepo::find_by_id(&state.pool, auth.shop_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let deleted = CategoryRepo::delete(&state.pool, auth.shop_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    state
        .logger
        .record(
            CreateActivityEvent::new(auth.shop_id, action_types::DELETE_CATEGORY)
                .with_actor(auth.user_id)
                .with_entity("categories", id)
                .with_metadata(json!({ "name": category.name.as_str() })),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}
