//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query over
//! tenant-owned tables takes the owning `shop_id` and includes it in the
//! predicate; no cross-shop read or write path exists here.

pub mod activity_event_repo;
pub mod category_repo;
pub mod customer_repo;
pub mod login_session_repo;
pub mod product_repo;
pub mod sale_repo;
pub mod shop_repo;
pub mod supplier_repo;
pub mod user_repo;

pub use activity_event_repo::ActivityEventRepo;
pub use category_repo::CategoryRepo;
pub use customer_repo::CustomerRepo;
pub use login_session_repo::LoginSessionRepo;
pub use product_repo::ProductRepo;
pub use sale_repo::{SaleCreateError, SaleRepo};
pub use shop_repo::ShopRepo;
pub use supplier_repo::SupplierRepo;
pub use user_repo::UserRepo;
