//! Pure domain logic shared by the repository layer and the API.
//!
//! This crate has no database or framework dependencies so its functions can
//! be unit-tested without a running Postgres.

pub mod activity;
pub mod error;
pub mod export;
pub mod inventory;
pub mod notify;
pub mod sessions;
pub mod types;

pub use error::CoreError;
pub use types::{DbId, Timestamp};
