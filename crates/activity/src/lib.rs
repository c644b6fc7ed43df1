//! Activity tracking services.
//!
//! This crate provides the write side of the activity log:
//!
//! - [`ActivityLogger`] -- appends events to the store, with a best-effort
//!   mode that never fails the caller's primary operation.
//! - [`LowStockScanner`] -- on-demand sweep over a shop's inventory that
//!   synthesizes low-stock alert events.

pub mod logger;
pub mod scanner;

pub use logger::ActivityLogger;
pub use scanner::LowStockScanner;
