//! Repository for the `sales` and `sale_items` tables.
//!
//! Recording a sale is the one multi-statement write in the schema: the sale
//! row, its line items, and the stock decrements commit together or not at
//! all.

use sqlx::PgPool;
use storefront_core::error::CoreError;
use storefront_core::types::{Cents, DbId};

use crate::models::sale::{CreateSale, CreateSaleItem, Sale, SaleItem, SaleWithItems};

/// Column list for `sales` SELECT queries.
const COLUMNS: &str = "id, shop_id, customer_id, cashier_id, order_number, \
                        total_cents, payment_method, status, created_at, updated_at";

/// Column list for `sale_items` SELECT queries.
const ITEM_COLUMNS: &str = "id, sale_id, product_id, quantity, unit_price_cents";

/// Failure modes of recording a sale. Domain rejections (unknown product,
/// not enough stock) are separated from infrastructure errors so the API can
/// map them to 4xx responses.
#[derive(Debug, thiserror::Error)]
pub enum SaleCreateError {
    #[error(transparent)]
    Domain(#[from] CoreError),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides create and query operations for sales.
pub struct SaleRepo;

impl SaleRepo {
    /// Record a sale: insert the sale and its items, decrement stock.
    ///
    /// Line items are validated first (at least one item, positive
    /// quantities). Each product row is locked before its quantity check so
    /// two concurrent checkouts cannot both take the last unit; locks are
    /// taken in product-id order regardless of cart order so overlapping
    /// carts cannot deadlock. The order number is minted from the sale id,
    /// which keeps it unique under concurrent checkouts.
    pub async fn create(
        pool: &PgPool,
        shop_id: DbId,
        cashier_id: Option<DbId>,
        input: &CreateSale,
    ) -> Result<SaleWithItems, SaleCreateError> {
        if input.items.is_empty() {
            return Err(CoreError::Validation("a sale needs at least one item".into()).into());
        }
        for item in &input.items {
            if item.quantity <= 0 {
                return Err(CoreError::Validation(format!(
                    "quantity for product {} must be positive",
                    item.product_id
                ))
                .into());
            }
        }

        let mut tx = pool.begin().await?;

        // Lock each product row, check stock, and accumulate the total.
        // Lock order follows product id, not cart order.
        let mut cart: Vec<&CreateSaleItem> = input.items.iter().collect();
        cart.sort_by_key(|item| item.product_id);

        let mut total_cents: Cents = 0;
        let mut priced_items: Vec<(DbId, i32, Cents)> = Vec::with_capacity(cart.len());

        for item in cart {
            let row = sqlx::query_as::<_, (String, i64, i32)>(
                "SELECT name, price_cents, quantity FROM products \
                 WHERE id = $1 AND shop_id = $2 \
                 FOR UPDATE",
            )
            .bind(item.product_id)
            .bind(shop_id)
            .fetch_optional(&mut *tx)
            .await?;

            let (name, price_cents, on_hand) = row.ok_or(CoreError::NotFound {
                entity: "Product",
                id: item.product_id,
            })?;

            if on_hand < item.quantity {
                return Err(CoreError::InsufficientStock {
                    product: name,
                    available: on_hand,
                    requested: item.quantity,
                }
                .into());
            }

            total_cents += price_cents * i64::from(item.quantity);
            priced_items.push((item.product_id, item.quantity, price_cents));
        }

        let payment_method = input.payment_method.as_deref().unwrap_or("cash");

        // Draw the id up front so the order number can embed it.
        let sale_query = format!(
            "WITH seq AS (SELECT nextval(pg_get_serial_sequence('sales', 'id')) AS id) \
             INSERT INTO sales \
                 (id, shop_id, customer_id, cashier_id, order_number, total_cents, payment_method) \
             SELECT seq.id, $1, $2, $3, 'S-' || seq.id::text, $4, $5 FROM seq \
             RETURNING {COLUMNS}"
        );
        let sale = sqlx::query_as::<_, Sale>(&sale_query)
            .bind(shop_id)
            .bind(input.customer_id)
            .bind(cashier_id)
            .bind(total_cents)
            .bind(payment_method)
            .fetch_one(&mut *tx)
            .await?;

        let item_query = format!(
            "INSERT INTO sale_items (sale_id, product_id, quantity, unit_price_cents) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(priced_items.len());
        for (product_id, quantity, unit_price_cents) in &priced_items {
            let item = sqlx::query_as::<_, SaleItem>(&item_query)
                .bind(sale.id)
                .bind(product_id)
                .bind(quantity)
                .bind(unit_price_cents)
                .fetch_one(&mut *tx)
                .await?;
            items.push(item);

            sqlx::query("UPDATE products SET quantity = quantity - $3 WHERE id = $1 AND shop_id = $2")
                .bind(product_id)
                .bind(shop_id)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(SaleWithItems { sale, items })
    }

    /// Find a sale with its items by id within a shop.
    pub async fn find_by_id(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
    ) -> Result<Option<SaleWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sales WHERE id = $1 AND shop_id = $2");
        let sale = sqlx::query_as::<_, Sale>(&query)
            .bind(id)
            .bind(shop_id)
            .fetch_optional(pool)
            .await?;

        let Some(sale) = sale else {
            return Ok(None);
        };

        let item_query =
            format!("SELECT {ITEM_COLUMNS} FROM sale_items WHERE sale_id = $1 ORDER BY id");
        let items = sqlx::query_as::<_, SaleItem>(&item_query)
            .bind(sale.id)
            .fetch_all(pool)
            .await?;

        Ok(Some(SaleWithItems { sale, items }))
    }

    /// List recent sales for a shop, newest first.
    pub async fn list(pool: &PgPool, shop_id: DbId, limit: i64) -> Result<Vec<Sale>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sales WHERE shop_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, Sale>(&query)
            .bind(shop_id)
            .bind(limit.clamp(1, 200))
            .fetch_all(pool)
            .await
    }
}
