//! Repository for the `products` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, shop_id, category_id, supplier_id, name, sku, \
                        price_cents, quantity, reorder_point, is_active, \
                        created_at, updated_at";

/// Provides CRUD and inventory operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product for a shop, returning the created row.
    pub async fn create(
        pool: &PgPool,
        shop_id: DbId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                 (shop_id, category_id, supplier_id, name, sku, price_cents, quantity, reorder_point) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(shop_id)
            .bind(input.category_id)
            .bind(input.supplier_id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(input.price_cents)
            .bind(input.quantity)
            .bind(input.reorder_point)
            .fetch_one(pool)
            .await
    }

    /// Find a product by id within a shop.
    pub async fn find_by_id(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1 AND shop_id = $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(shop_id)
            .fetch_optional(pool)
            .await
    }

    /// List all products for a shop ordered by name.
    pub async fn list(pool: &PgPool, shop_id: DbId) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE shop_id = $1 ORDER BY name");
        sqlx::query_as::<_, Product>(&query)
            .bind(shop_id)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the shop has no product with the given `id`.
    pub async fn update(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                name = COALESCE($3, name), \
                sku = COALESCE($4, sku), \
                category_id = COALESCE($5, category_id), \
                supplier_id = COALESCE($6, supplier_id), \
                price_cents = COALESCE($7, price_cents), \
                quantity = COALESCE($8, quantity), \
                reorder_point = COALESCE($9, reorder_point), \
                is_active = COALESCE($10, is_active) \
             WHERE id = $1 AND shop_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(input.category_id)
            .bind(input.supplier_id)
            .bind(input.price_cents)
            .bind(input.quantity)
            .bind(input.reorder_point)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if the product appears on a sale;
    /// the API maps that to a conflict response.
    pub async fn delete(pool: &PgPool, shop_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND shop_id = $2")
            .bind(id)
            .bind(shop_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set a product's stock level directly, returning the updated row.
    pub async fn set_quantity(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
        quantity: i32,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET quantity = $3 \
             WHERE id = $1 AND shop_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(shop_id)
            .bind(quantity)
            .fetch_optional(pool)
            .await
    }

    /// All active products of a shop at or below their configured reorder
    /// point.
    ///
    /// Products with `reorder_point = 0` have no threshold and never appear;
    /// deactivated products are skipped regardless of stock level.
    pub async fn low_stock(pool: &PgPool, shop_id: DbId) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE shop_id = $1 AND is_active \
               AND reorder_point > 0 AND quantity <= reorder_point \
             ORDER BY name"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(shop_id)
            .fetch_all(pool)
            .await
    }
}
