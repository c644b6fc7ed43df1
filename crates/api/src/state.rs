use std::sync::Arc;

use storefront_activity::{ActivityLogger, LowStockScanner};

use crate::config::ServerConfig;

/// Everything a handler can reach, cloned per request.
///
/// All fields are `Arc`s or pools, so the clone is a handful of refcount
/// bumps. The logger is deliberately shared: its dropped-write counter is
/// process-wide, not per-request.
#[derive(Clone)]
pub struct AppState {
    pub pool: storefront_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Activity log writer used by every mutating handler.
    pub logger: Arc<ActivityLogger>,
    /// On-demand low-stock sweep over a shop's inventory.
    pub scanner: Arc<LowStockScanner>,
}
