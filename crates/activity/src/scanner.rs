//! On-demand low-stock sweep.

use std::sync::Arc;

use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::types::DbId;
use storefront_db::models::activity_event::CreateActivityEvent;
use storefront_db::repositories::ProductRepo;
use storefront_db::DbPool;

use crate::logger::ActivityLogger;

/// Sweeps a shop's inventory and emits a `low_stock_alert` event for every
/// product at or below its reorder point.
///
/// The scanner does not deduplicate: each invocation re-emits an alert for
/// every product still under its threshold, so repeated scans accumulate
/// duplicate alert events. It is invoked on demand (dashboard load, or after
/// an inventory mutation), not from a timer, and is safe to run concurrently
/// with itself under that same policy.
pub struct LowStockScanner {
    pool: DbPool,
    logger: Arc<ActivityLogger>,
}

impl LowStockScanner {
    /// Create a scanner over the given pool, emitting through `logger`.
    pub fn new(pool: DbPool, logger: Arc<ActivityLogger>) -> Self {
        Self { pool, logger }
    }

    /// Run one sweep for a shop. Returns the number of alerts emitted.
    ///
    /// A failed alert write is logged and skipped; it does not abort the
    /// sweep and does not count as emitted.
    pub async fn scan(&self, shop_id: DbId) -> Result<u32, sqlx::Error> {
        let products = ProductRepo::low_stock(&self.pool, shop_id).await?;

        let mut emitted = 0u32;
        for product in &products {
            let metadata = json!({
                "product_id": product.id,
                "product_name": product.name,
                "current_stock": product.quantity,
                "reorder_point": product.reorder_point,
            });
            let event = CreateActivityEvent::new(shop_id, action_types::LOW_STOCK_ALERT)
                .with_entity("products", product.id)
                .with_metadata(metadata);

            match self.logger.append(&event).await {
                Ok(_) => emitted += 1,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        product_id = product.id,
                        shop_id,
                        "Failed to record low-stock alert"
                    );
                }
            }
        }

        if emitted > 0 {
            tracing::info!(shop_id, count = emitted, "Low-stock scan emitted alerts");
        }

        Ok(emitted)
    }
}
