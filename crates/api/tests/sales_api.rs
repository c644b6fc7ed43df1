//! HTTP-level integration tests for point-of-sale checkout.
//!
//! Checkout is the one multi-step write in the system: stock decrements,
//! the sale and its line items, and the follow-on activity events must
//! either all land or (on a stock shortfall) leave nothing behind.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, seed_staff};
use sqlx::PgPool;
use storefront_db::models::product::{CreateProduct, Product};
use storefront_db::repositories::ProductRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a product directly in the database (no API call, no events).
async fn seed_product(
    pool: &PgPool,
    shop_id: i64,
    name: &str,
    price_cents: i64,
    quantity: i32,
    reorder_point: i32,
) -> Product {
    let input = CreateProduct {
        name: name.to_string(),
        sku: None,
        category_id: None,
        supplier_id: None,
        price_cents,
        quantity,
        reorder_point,
    };
    ProductRepo::create(pool, shop_id, &input)
        .await
        .expect("product creation should succeed")
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

/// Current stock level for a product.
async fn stock_of(pool: &PgPool, product_id: i64) -> i32 {
    sqlx::query_scalar("SELECT quantity FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .expect("stock query should succeed")
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// A checkout decrements stock, totals the line items at current prices,
/// and records create_sale plus process_payment events.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_decrements_stock_and_logs(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "cashier").await;
    let lamp = seed_product(&pool, staff.shop_id, "Desk Lamp", 1999, 10, 2).await;
    let mug = seed_product(&pool, staff.shop_id, "Blue Mug", 450, 20, 5).await;

    let body = serde_json::json!({
        "payment_method": "card",
        "items": [
            {"product_id": lamp.id, "quantity": 2},
            {"product_id": mug.id, "quantity": 3}
        ]
    });
    let app = common::test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["order_number"].as_str().unwrap().starts_with("S-"));
    assert_eq!(json["total_cents"], 2 * 1999 + 3 * 450);
    assert_eq!(json["payment_method"], "card");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["cashier_id"], staff.user_id);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);

    assert_eq!(stock_of(&pool, lamp.id).await, 8);
    assert_eq!(stock_of(&pool, mug.id).await, 17);

    assert_eq!(count_events(&pool, staff.shop_id, "create_sale").await, 1);
    assert_eq!(count_events(&pool, staff.shop_id, "process_payment").await, 1);
    // Neither product crossed its reorder point.
    assert_eq!(count_events(&pool, staff.shop_id, "low_stock_alert").await, 0);
}

/// Line items capture the unit price at sale time; later price edits do not
/// rewrite history.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_captures_price_at_sale_time(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "pricecapture").await;
    let lamp = seed_product(&pool, staff.shop_id, "Desk Lamp", 1999, 10, 2).await;

    let body = serde_json::json!({"items": [{"product_id": lamp.id, "quantity": 1}]});
    let app = common::test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    sqlx::query("UPDATE products SET price_cents = 2999 WHERE id = $1")
        .bind(lamp.id)
        .execute(&pool)
        .await
        .expect("price update should succeed");

    let unit_price: i64 = sqlx::query_scalar("SELECT unit_price_cents FROM sale_items WHERE sale_id = $1")
        .bind(json["id"].as_i64().unwrap())
        .fetch_one(&pool)
        .await
        .expect("line item should exist");
    assert_eq!(unit_price, 1999);
}

/// A sale that pushes a product to its reorder point emits a low-stock
/// alert for that product as part of the checkout.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_emits_alert_on_threshold_crossing(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "crossing").await;
    let batteries = seed_product(&pool, staff.shop_id, "AA Batteries", 300, 6, 5).await;

    let body = serde_json::json!({"items": [{"product_id": batteries.id, "quantity": 2}]});
    let app = common::test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_eq!(count_events(&pool, staff.shop_id, "low_stock_alert").await, 1);

    let metadata: serde_json::Value = sqlx::query_scalar(
        "SELECT metadata FROM activity_events WHERE shop_id = $1 AND action = 'low_stock_alert'",
    )
    .bind(staff.shop_id)
    .fetch_one(&pool)
    .await
    .expect("alert row should exist");
    assert_eq!(metadata["product_name"], "AA Batteries");
    assert_eq!(metadata["current_stock"], 4);
}

/// Selling more than is on hand returns 409 and leaves no partial effects:
/// no sale row, no stock change, no events.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_insufficient_stock_rolls_back(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "shortstock").await;
    let lamp = seed_product(&pool, staff.shop_id, "Desk Lamp", 1999, 10, 2).await;
    let mug = seed_product(&pool, staff.shop_id, "Blue Mug", 450, 1, 0).await;

    // The first line is satisfiable, the second is not.
    let body = serde_json::json!({
        "items": [
            {"product_id": lamp.id, "quantity": 2},
            {"product_id": mug.id, "quantity": 5}
        ]
    });
    let app = common::test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INSUFFICIENT_STOCK");

    let sales: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales WHERE shop_id = $1")
        .bind(staff.shop_id)
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(sales, 0, "no sale row may survive the rollback");
    assert_eq!(stock_of(&pool, lamp.id).await, 10, "stock must be untouched");
    assert_eq!(count_events(&pool, staff.shop_id, "create_sale").await, 0);
}

/// A sale needs at least one line item.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_rejects_empty_cart(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "emptycart").await;

    let body = serde_json::json!({"items": []});
    let app = common::test_app(pool);
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Zero and negative quantities are rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_rejects_nonpositive_quantity(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "zeroqty").await;
    let lamp = seed_product(&pool, staff.shop_id, "Desk Lamp", 1999, 10, 2).await;

    let body = serde_json::json!({"items": [{"product_id": lamp.id, "quantity": 0}]});
    let app = common::test_app(pool);
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Selling a product that does not exist in the shop is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_unknown_product_is_404(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "ghostsale").await;

    let body = serde_json::json!({"items": [{"product_id": 999999, "quantity": 1}]});
    let app = common::test_app(pool);
    let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Another shop's product cannot be sold even with a valid id.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_cross_tenant_product_is_404(pool: PgPool) {
    let alpha = seed_staff(&pool, "Alpha Mart", "alphasale").await;
    let bravo = seed_staff(&pool, "Bravo Mart", "bravosale").await;
    let lamp = seed_product(&pool, alpha.shop_id, "Alpha Lamp", 1999, 10, 2).await;

    let body = serde_json::json!({"items": [{"product_id": lamp.id, "quantity": 1}]});
    let app = common::test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/sales", body, &bravo.token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(stock_of(&pool, lamp.id).await, 10);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /sales lists the shop's sales, most recent first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sales_newest_first(pool: PgPool) {
    let staff = seed_staff(&pool, "Corner Store", "salelister").await;
    let lamp = seed_product(&pool, staff.shop_id, "Desk Lamp", 1999, 10, 2).await;

    let mut order_numbers = Vec::new();
    for _ in 0..2 {
        let body = serde_json::json!({"items": [{"product_id": lamp.id, "quantity": 1}]});
        let app = common::test_app(pool.clone());
        let response = post_json_auth(app, "/api/v1/sales", body, &staff.token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        order_numbers.push(json["order_number"].as_str().unwrap().to_string());
    }

    let app = common::test_app(pool);
    let response = get_auth(app, "/api/v1/sales", &staff.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let sales = json.as_array().expect("response body should be an array");
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0]["order_number"], order_numbers[1].as_str());
    assert_eq!(sales[1]["order_number"], order_numbers[0].as_str());
}

/// Sales from another shop do not appear in the listing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sales_scoped_to_tenant(pool: PgPool) {
    let alpha = seed_staff(&pool, "Alpha Mart", "alphalist").await;
    let bravo = seed_staff(&pool, "Bravo Mart", "bravolist").await;
    let lamp = seed_product(&pool, alpha.shop_id, "Alpha Lamp", 1999, 10, 2).await;

    let body = serde_json::json!({"items": [{"product_id": lamp.id, "quantity": 1}]});
    let app = common::test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/sales", body, &alpha.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::test_app(pool);
    let response = get_auth(app, "/api/v1/sales", &bravo.token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
