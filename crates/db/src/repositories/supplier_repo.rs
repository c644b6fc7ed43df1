//! Repository for the `suppliers` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::supplier::{CreateSupplier, Supplier, UpdateSupplier};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, shop_id, name, company_name, email, phone, created_at, updated_at";

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    /// Insert a new supplier for a shop, returning the created row.
    pub async fn create(
        pool: &PgPool,
        shop_id: DbId,
        input: &CreateSupplier,
    ) -> Result<Supplier, sqlx::Error> {
        let query = format!(
            "INSERT INTO suppliers (shop_id, name, company_name, email, phone) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.company_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a supplier by id within a shop.
    pub async fn find_by_id(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
    ) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = $1 AND shop_id = $2");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(shop_id)
            .fetch_optional(pool)
            .await
    }

    /// List all suppliers for a shop ordered by name.
    pub async fn list(pool: &PgPool, shop_id: DbId) -> Result<Vec<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE shop_id = $1 ORDER BY name");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(shop_id)
            .fetch_all(pool)
            .await
    }

    /// Update a supplier. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the shop has no supplier with the given `id`.
    pub async fn update(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
        input: &UpdateSupplier,
    ) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!(
            "UPDATE suppliers SET \
                name = COALESCE($3, name), \
                company_name = COALESCE($4, company_name), \
                email = COALESCE($5, email), \
                phone = COALESCE($6, phone) \
             WHERE id = $1 AND shop_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.company_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a supplier. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, shop_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1 AND shop_id = $2")
            .bind(id)
            .bind(shop_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
