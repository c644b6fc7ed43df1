//! Notification projection rules: which events surface on the dashboard
//! widget, their severity tags, and the pagination arithmetic.

use serde::Serialize;

use crate::activity::{ActionKind, EntityKind};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity tag attached to a dashboard notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Inventory dropped to or below its reorder point.
    Warning,
    /// A catalog record was deleted.
    Destructive,
    /// Everything else in scope.
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Destructive => "destructive",
            Severity::Info => "info",
        }
    }
}

/// Severity for an alert-worthy action kind.
pub fn severity_for(kind: ActionKind) -> Severity {
    match kind {
        ActionKind::LowStockAlert => Severity::Warning,
        ActionKind::Deleted(_) => Severity::Destructive,
        _ => Severity::Info,
    }
}

// ---------------------------------------------------------------------------
// Notification scope
// ---------------------------------------------------------------------------

/// Whether a kind belongs on the dashboard notification widget.
///
/// The widget shows catalog mutations (products, categories, suppliers) and
/// low-stock alerts. Sessions, POS traffic, and customer CRUD stay out of it;
/// they are visible on the full activity feed instead.
pub fn is_alert_worthy(kind: ActionKind) -> bool {
    match kind {
        ActionKind::LowStockAlert => true,
        ActionKind::Created(e) | ActionKind::Updated(e) | ActionKind::Deleted(e) => matches!(
            e,
            EntityKind::Product | EntityKind::Category | EntityKind::Supplier
        ),
        _ => false,
    }
}

/// Every stored action tag in notification scope, canonical and variant
/// spellings both. The projector filters with `action = ANY(..)` over this
/// list so the SQL predicate and [`is_alert_worthy`] stay in agreement.
pub const ALERT_WORTHY_ACTIONS: &[&str] = &[
    "product_created",
    "create_product",
    "product_updated",
    "update_product",
    "product_deleted",
    "delete_product",
    "create_category",
    "category_created",
    "update_category",
    "category_updated",
    "delete_category",
    "category_deleted",
    "create_supplier",
    "supplier_created",
    "update_supplier",
    "supplier_updated",
    "delete_supplier",
    "supplier_deleted",
    "low_stock_alert",
];

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page indices are 1-based; zero and negative inputs clamp to the first page.
pub fn clamp_page(page: i64) -> i64 {
    page.max(1)
}

/// Clamp a requested page size into `[1, MAX_PAGE_SIZE]`.
pub fn clamp_page_size(page_size: i64) -> i64 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// Row offset for a 1-based page. Pages past the end yield offsets past the
/// end, which the store answers with an empty page rather than an error.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (clamp_page(page) - 1).saturating_mul(clamp_page_size(page_size))
}

/// Number of pages needed for `total` rows, i.e. `ceil(total / page_size)`.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    let size = clamp_page_size(page_size);
    (total.max(0) + size - 1) / size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
