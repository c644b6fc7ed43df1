//! Login session model.
//!
//! One row per login. Logout closes the row; an open row
//! (`logged_out_at IS NULL`) means "currently active". Rows are never
//! deleted.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::sessions::duration_minutes;
use storefront_core::types::{DbId, Timestamp};

/// A session row from the `login_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoginSession {
    pub id: DbId,
    pub shop_id: DbId,
    pub user_id: DbId,
    pub logged_in_at: Timestamp,
    pub logged_out_at: Option<Timestamp>,
}

impl LoginSession {
    /// Session length in whole minutes, `None` while still open.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.logged_out_at
            .map(|out| duration_minutes(self.logged_in_at, out))
    }
}
