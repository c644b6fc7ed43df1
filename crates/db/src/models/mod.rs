//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity_event;
pub mod category;
pub mod customer;
pub mod login_session;
pub mod product;
pub mod sale;
pub mod shop;
pub mod supplier;
pub mod user;
