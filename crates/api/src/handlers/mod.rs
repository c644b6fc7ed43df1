//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `storefront_db`,
//! map errors via [`AppError`](crate::error::AppError), and record activity
//! events through the shared [`ActivityLogger`](storefront_activity::ActivityLogger)
//! after their primary write succeeds.

pub mod activity;
pub mod auth;
pub mod categories;
pub mod customers;
pub mod inventory;
pub mod notifications;
pub mod products;
pub mod sales;
pub mod suppliers;
