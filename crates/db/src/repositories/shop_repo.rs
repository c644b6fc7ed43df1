//! Repository for the `shops` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::shop::{CreateShop, Shop};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, phone, created_at, updated_at";

/// Provides CRUD operations for shops (tenants).
pub struct ShopRepo;

impl ShopRepo {
    /// Insert a new shop, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShop) -> Result<Shop, sqlx::Error> {
        let query = format!(
            "INSERT INTO shops (name, address, phone) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shop>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a shop by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shop>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shops WHERE id = $1");
        sqlx::query_as::<_, Shop>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
