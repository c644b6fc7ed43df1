//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; every failure funnels through
//! [`AppError::into_response`] so the dashboard always sees the same
//! `{error, code}` JSON shape regardless of which layer failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storefront_core::error::CoreError;
use storefront_db::repositories::SaleCreateError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain-level rejection from `storefront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<SaleCreateError> for AppError {
    fn from(err: SaleCreateError) -> Self {
        match err {
            SaleCreateError::Domain(core) => AppError::Core(core),
            SaleCreateError::Db(db) => AppError::Database(db),
        }
    }
}

/// Assemble the error body. `code` is the machine-readable discriminator
/// the dashboard switches on; `message` is for humans.
fn reply(status: StatusCode, code: &str, message: String) -> Response {
    (status, Json(json!({ "error": message, "code": code }))).into_response()
}

/// 500 with a sanitized body. The real cause goes to the log only; clients
/// never see internals.
fn internal(cause: &dyn std::fmt::Display) -> Response {
    tracing::error!(error = %cause, "Request failed with an internal error");
    reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => database_response(err),
            AppError::BadRequest(msg) => reply(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => internal(&msg),
        }
    }
}

fn core_response(core: CoreError) -> Response {
    match core {
        CoreError::NotFound { entity, id } => reply(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => reply(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
        CoreError::Conflict(msg) => reply(StatusCode::CONFLICT, "CONFLICT", msg),
        CoreError::InsufficientStock { .. } => {
            // 409, not 400: the request was well-formed, the shelf was not.
            let msg = core.to_string();
            reply(StatusCode::CONFLICT, "INSUFFICIENT_STOCK", msg)
        }
        CoreError::Unauthorized(msg) => reply(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
        CoreError::Forbidden(msg) => reply(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
        CoreError::Internal(msg) => internal(&msg),
    }
}

/// Map sqlx failures onto the HTTP surface.
///
/// `RowNotFound` reads as 404. Unique violations on our `uq_*` constraints
/// and foreign-key violations both read as 409 (the first is a duplicate,
/// the second a row still referenced elsewhere, e.g. deleting a product
/// that appears in sale_items). Anything else is a sanitized 500.
fn database_response(err: sqlx::Error) -> Response {
    let db_err = match &err {
        sqlx::Error::RowNotFound => {
            return reply(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            );
        }
        sqlx::Error::Database(db_err) => db_err,
        _ => return internal(&err),
    };

    match db_err.code().as_deref() {
        Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return reply(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            internal(&err)
        }
        Some("23503") => reply(
            StatusCode::CONFLICT,
            "CONFLICT",
            "Record is referenced by other data and cannot be removed".to_string(),
        ),
        _ => internal(&err),
    }
}
