//! HTTP-level integration tests for the products resource.
//!
//! Every mutation here must leave a matching event in the activity store;
//! the assertions check both the HTTP response and the recorded event.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth, seed_staff};
use sqlx::PgPool;
use storefront_db::models::sale::{CreateSale, CreateSaleItem};
use storefront_db::repositories::SaleRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a product via the API and return its parsed JSON body.
async fn create_product(pool: PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::test_app(pool);
    let response = post_json_auth(app, "/api/v1/products", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Count activity events for a shop with the given action tag.
async fn count_events(pool: &PgPool, shop_id: i64, action: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM activity_events WHERE shop_id = $1 AND action = $2")
        .bind(shop_id)
        .bind(action)
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /products returns 201 with the stored row and records the creation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_product(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "prodmaker").await;

    let body = serde_json::json!({
        "name": "Desk Lamp",
        "sku": "DL-100",
        "price_cents": 1999,
        "quantity": 12,
        "reorder_point": 3
    });
    let json = create_product(pool.clone(), &staff.token, body).await;

    assert!(json["id"].is_number());
    assert_eq!(json["shop_id"], staff.shop_id);
    assert_eq!(json["name"], "Desk Lamp");
    assert_eq!(json["sku"], "DL-100");
    assert_eq!(json["price_cents"], 1999);
    assert_eq!(json["quantity"], 12);
    assert_eq!(json["reorder_point"], 3);
    assert_eq!(json["is_active"], true);

    assert_eq!(count_events(&pool, staff.shop_id, "product_created").await, 1);

    let metadata: serde_json::Value = sqlx::query_scalar(
        "SELECT metadata FROM activity_events WHERE shop_id = $1 AND action = 'product_created'",
    )
    .bind(staff.shop_id)
    .fetch_one(&pool)
    .await
    .expect("event row should exist");
    assert_eq!(metadata["product_name"], "Desk Lamp");
    assert_eq!(metadata["sku"], "DL-100");
}

/// A blank product name is rejected before anything is written.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_product_blank_name_rejected(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "blankname").await;

    let app = common::test_app(pool.clone());
    let body = serde_json::json!({"name": "   ", "price_cents": 100});
    let response = post_json_auth(app, "/api/v1/products", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_events(&pool, staff.shop_id, "product_created").await, 0);
}

/// Negative prices and stock levels are rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_product_negative_values_rejected(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "negprice").await;

    for body in [
        serde_json::json!({"name": "Broken", "price_cents": -5}),
        serde_json::json!({"name": "Broken", "quantity": -1}),
        serde_json::json!({"name": "Broken", "reorder_point": -1}),
    ] {
        let app = common::test_app(pool.clone());
        let response = post_json_auth(app, "/api/v1/products", body, &staff.token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// Duplicate SKUs within one shop map to 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_sku_conflict(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "skudupe").await;

    let body = serde_json::json!({"name": "First", "sku": "DUP-1", "price_cents": 100});
    create_product(pool.clone(), &staff.token, body).await;

    let app = common::test_app(pool);
    let body = serde_json::json!({"name": "Second", "sku": "DUP-1", "price_cents": 100});
    let response = post_json_auth(app, "/api/v1/products", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// The same SKU is fine in two different shops.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_sku_allowed_across_shops(pool: PgPool) {
    let alpha = seed_staff(&pool, "Alpha Mart", "alphasku").await;
    let bravo = seed_staff(&pool, "Bravo Mart", "bravosku").await;

    let body = serde_json::json!({"name": "Widget", "sku": "W-1", "price_cents": 100});
    create_product(pool.clone(), &alpha.token, body.clone()).await;
    create_product(pool, &bravo.token, body).await;
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /products lists the shop's products ordered by name.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_products(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "prodlister").await;

    create_product(
        pool.clone(),
        &staff.token,
        serde_json::json!({"name": "Zip Ties", "price_cents": 100}),
    )
    .await;
    create_product(
        pool.clone(),
        &staff.token,
        serde_json::json!({"name": "AA Batteries", "price_cents": 100}),
    )
    .await;

    let app = common::test_app(pool);
    let response = get_auth(app, "/api/v1/products", &staff.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().expect("response body should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "AA Batteries");
    assert_eq!(items[1]["name"], "Zip Ties");
}

/// GET /products/{id} returns the row; an unknown id is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_product_by_id(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "prodgetter").await;
    let created = create_product(
        pool.clone(),
        &staff.token,
        serde_json::json!({"name": "Desk Lamp", "price_cents": 1999}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/products/{id}"), &staff.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Desk Lamp");

    let app = common::test_app(pool);
    let response = get_auth(app, "/api/v1/products/999999", &staff.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A product id from another shop reads as 404, not 403.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cross_tenant_product_is_404(pool: PgPool) {
    let alpha = seed_staff(&pool, "Alpha Mart", "alphaprod").await;
    let bravo = seed_staff(&pool, "Bravo Mart", "bravoprod").await;

    let created = create_product(
        pool.clone(),
        &alpha.token,
        serde_json::json!({"name": "Alpha Widget", "price_cents": 100}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::test_app(pool);
    let response = get_auth(app, &format!("/api/v1/products/{id}"), &bravo.token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Product listing requires authentication.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_products_require_auth(pool: PgPool) {
    let app = common::test_app(pool);
    let response = common::get(app, "/api/v1/products").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

/// PUT /products/{id} applies partial updates and records the change.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_product(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "produpdater").await;
    let created = create_product(
        pool.clone(),
        &staff.token,
        serde_json::json!({"name": "Desk Lamp", "price_cents": 1999}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/products/{id}"),
        serde_json::json!({"name": "Office Lamp", "price_cents": 2499}),
        &staff.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Office Lamp");
    assert_eq!(json["price_cents"], 2499);

    assert_eq!(count_events(&pool, staff.shop_id, "product_updated").await, 1);
}

/// DELETE /products/{id} removes the row and records what was removed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_product(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "proddeleter").await;
    let created = create_product(
        pool.clone(),
        &staff.token,
        serde_json::json!({"name": "Desk Lamp", "price_cents": 1999}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/products/{id}"), &staff.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/products/{id}"), &staff.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The deletion event still names the product even though the row is gone.
    let metadata: serde_json::Value = sqlx::query_scalar(
        "SELECT metadata FROM activity_events WHERE shop_id = $1 AND action = 'product_deleted'",
    )
    .bind(staff.shop_id)
    .fetch_one(&pool)
    .await
    .expect("event row should exist");
    assert_eq!(metadata["product_name"], "Desk Lamp");
}

/// A product that already appears in a sale cannot be deleted: 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_sold_product_conflicts(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "solddelete").await;
    let created = create_product(
        pool.clone(),
        &staff.token,
        serde_json::json!({"name": "Desk Lamp", "price_cents": 1999, "quantity": 5}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let input = CreateSale {
        customer_id: None,
        payment_method: None,
        items: vec![CreateSaleItem {
            product_id: id,
            quantity: 1,
        }],
    };
    SaleRepo::create(&pool, staff.shop_id, Some(staff.user_id), &input)
        .await
        .expect("sale should succeed");

    let app = common::test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/products/{id}"), &staff.token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(count_events(&pool, staff.shop_id, "product_deleted").await, 0);
}
