//! Shop (tenant) entity model.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A shop row from the `shops` table. One shop is one tenant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shop {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a shop. Used by provisioning tooling and test fixtures;
/// there is no public registration endpoint.
#[derive(Debug)]
pub struct CreateShop {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}
