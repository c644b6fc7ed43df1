//! Repository for the `customers` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, shop_id, name, email, phone, created_at, updated_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer for a shop, returning the created row.
    pub async fn create(
        pool: &PgPool,
        shop_id: DbId,
        input: &CreateCustomer,
    ) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (shop_id, name, email, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by id within a shop.
    pub async fn find_by_id(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1 AND shop_id = $2");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(shop_id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers for a shop ordered by name.
    pub async fn list(pool: &PgPool, shop_id: DbId) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE shop_id = $1 ORDER BY name");
        sqlx::query_as::<_, Customer>(&query)
            .bind(shop_id)
            .fetch_all(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the shop has no customer with the given `id`.
    pub async fn update(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET \
                name = COALESCE($3, name), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone) \
             WHERE id = $1 AND shop_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, shop_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1 AND shop_id = $2")
            .bind(id)
            .bind(shop_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
