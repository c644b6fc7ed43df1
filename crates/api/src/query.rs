//! Query-string parameter structs shared by more than one handler module.

use serde::Deserialize;

/// Offset pagination, `?limit=&offset=`. The feed and the sale listing use
/// this shape; clamping happens in the repository layer.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Page-numbered pagination, `?page=&page_size=`, 1-based. The dashboard
/// notification widget drives this one; out-of-range values are clamped
/// with the helpers in `storefront_core::notify`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
