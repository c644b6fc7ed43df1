//! Sale (point-of-sale transaction) entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{Cents, DbId, Timestamp};

/// A sale row from the `sales` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sale {
    pub id: DbId,
    pub shop_id: DbId,
    pub customer_id: Option<DbId>,
    pub cashier_id: Option<DbId>,
    pub order_number: String,
    /// Total in integer cents, summed from the line items at creation time.
    pub total_cents: Cents,
    pub payment_method: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A line item row from the `sale_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SaleItem {
    pub id: DbId,
    pub sale_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    /// Price captured at sale time; later product price edits do not touch it.
    pub unit_price_cents: Cents,
}

/// A sale together with its line items.
#[derive(Debug, Serialize)]
pub struct SaleWithItems {
    #[serde(flatten)]
    pub sale: Sale,
    pub items: Vec<SaleItem>,
}

/// One requested line item in a checkout.
#[derive(Debug, Deserialize)]
pub struct CreateSaleItem {
    pub product_id: DbId,
    pub quantity: i32,
}

/// DTO for recording a sale.
#[derive(Debug, Deserialize)]
pub struct CreateSale {
    pub customer_id: Option<DbId>,
    pub payment_method: Option<String>,
    pub items: Vec<CreateSaleItem>,
}
