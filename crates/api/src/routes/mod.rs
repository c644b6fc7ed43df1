pub mod activity;
pub mod auth;
pub mod categories;
pub mod customers;
pub mod health;
pub mod inventory;
pub mod notifications;
pub mod products;
pub mod sales;
pub mod suppliers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         current user (requires auth)
///
/// /activity                        activity feed (?category=&window=&limit=&offset=)
/// /activity/export                 CSV export (?from=&to=)
///
/// /notifications                   notification feed (?page=&page_size=)
///
/// /inventory/low-stock             products at or below reorder point
/// /inventory/low-stock/scan        run a low-stock sweep (POST)
///
/// /products                        list, create
/// /products/{id}                   get, update, delete
/// /products/{id}/stock             set stock level (POST)
///
/// /categories                      list, create
/// /categories/{id}                 update, delete
///
/// /suppliers                       list, create
/// /suppliers/{id}                  update, delete
///
/// /customers                       list, create
/// /customers/{id}                  update, delete
///
/// /sales                           list, create (checkout)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, logout, me).
        .nest("/auth", auth::router())
        // Activity feed and CSV export.
        .nest("/activity", activity::router())
        // Notification projection over the activity log.
        .nest("/notifications", notifications::router())
        // Low-stock listing and on-demand scan.
        .nest("/inventory", inventory::router())
        // Catalog and inventory resources.
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/suppliers", suppliers::router())
        .nest("/customers", customers::router())
        // Point-of-sale checkout.
        .nest("/sales", sales::router())
}
