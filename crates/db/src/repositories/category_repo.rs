//! Repository for the `categories` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, shop_id, name, description, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category for a shop, returning the created row.
    pub async fn create(
        pool: &PgPool,
        shop_id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (shop_id, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by id within a shop.
    pub async fn find_by_id(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND shop_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(shop_id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories for a shop ordered by name.
    pub async fn list(pool: &PgPool, shop_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE shop_id = $1 ORDER BY name");
        sqlx::query_as::<_, Category>(&query)
            .bind(shop_id)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the shop has no category with the given `id`.
    pub async fn update(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                name = COALESCE($3, name), \
                description = COALESCE($4, description) \
             WHERE id = $1 AND shop_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(shop_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, shop_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND shop_id = $2")
            .bind(id)
            .bind(shop_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
