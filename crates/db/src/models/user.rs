//! Staff user entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// Full row from `users`, password hash included. This type must never
/// cross the API boundary; convert to [`UserResponse`] first.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub shop_id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The serializable face of a user: everything except the hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub shop_id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            shop_id: u.shop_id,
            username: u.username,
            email: u.email,
            role: u.role,
            is_active: u.is_active,
            last_login_at: u.last_login_at,
            created_at: u.created_at,
        }
    }
}

/// DTO for creating a staff user. Used by provisioning tooling and test
/// fixtures; there is no public registration endpoint.
#[derive(Debug)]
pub struct CreateUser {
    pub shop_id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
