//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{Cents, DbId, Timestamp};

/// A product row from the `products` table.
///
/// `quantity` and `reorder_point` together form the inventory snapshot the
/// low-stock scanner reads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub shop_id: DbId,
    pub category_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub name: String,
    pub sku: Option<String>,
    /// Unit price in integer cents.
    pub price_cents: Cents,
    pub quantity: i32,
    pub reorder_point: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub sku: Option<String>,
    pub category_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    #[serde(default)]
    pub price_cents: Cents,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub reorder_point: i32,
}

/// DTO for updating a product. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub price_cents: Option<Cents>,
    pub quantity: Option<i32>,
    pub reorder_point: Option<i32>,
    pub is_active: Option<bool>,
}
