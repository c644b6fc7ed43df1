//! Handlers for the dashboard notification widget.
//!
//! Notifications are a projection of the activity event store: the
//! alert-worthy subset, severity-tagged, paged with a stable 1-based page
//! number and a total count.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use storefront_core::activity::{describe, ActionKind};
use storefront_core::notify::{
    clamp_page, clamp_page_size, page_offset, severity_for, total_pages, Severity,
    DEFAULT_PAGE_SIZE,
};
use storefront_core::types::{DbId, Timestamp};
use storefront_db::models::activity_event::ActivityFeedRow;
use storefront_db::repositories::ActivityEventRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One notification entry.
#[derive(Debug, Serialize)]
pub struct NotificationItem {
    pub id: DbId,
    pub action: String,
    pub severity: Severity,
    pub message: String,
    pub actor_name: Option<String>,
    pub entity_table: Option<String>,
    pub entity_id: Option<DbId>,
    pub occurred_at: Timestamp,
}

impl From<ActivityFeedRow> for NotificationItem {
    fn from(row: ActivityFeedRow) -> Self {
        let message = describe(
            &row.action,
            row.entity_table.as_deref(),
            row.entity_id,
            &row.metadata,
        );
        let severity = severity_for(ActionKind::parse(&row.action));
        NotificationItem {
            id: row.id,
            action: row.action,
            severity,
            message,
            actor_name: row.actor_name,
            entity_table: row.entity_table,
            entity_id: row.entity_id,
            occurred_at: row.occurred_at,
        }
    }
}

/// One page of notifications with pagination bookkeeping.
#[derive(Debug, Serialize)]
pub struct NotificationPage {
    pub items: Vec<NotificationItem>,
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl NotificationPage {
    fn empty(page: i64, page_size: i64) -> Self {
        NotificationPage {
            items: Vec::new(),
            page,
            page_size,
            total_count: 0,
            total_pages: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn read_page(
    state: &AppState,
    shop_id: DbId,
    page: i64,
    page_size: i64,
) -> Result<NotificationPage, sqlx::Error> {
    let offset = page_offset(page, page_size);
    let rows = ActivityEventRepo::notifications(&state.pool, shop_id, page_size, offset).await?;
    let total_count = ActivityEventRepo::count_notifications(&state.pool, shop_id).await?;

    Ok(NotificationPage {
        items: rows.into_iter().map(NotificationItem::from).collect(),
        page,
        page_size,
        total_count,
        total_pages: total_pages(total_count, page_size),
    })
}

/// GET /api/v1/notifications?page=&page_size=
///
/// List the shop's alert-worthy events, most recent first. Pages are
/// 1-based; a page past the end returns empty `items` with the unchanged
/// `total_count`, never an error.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<NotificationPage>>> {
    let page = clamp_page(params.page.unwrap_or(1));
    let page_size = clamp_page_size(params.page_size.unwrap_or(DEFAULT_PAGE_SIZE));

    // A read failure degrades to an empty page; the widget is ornamental
    // and must not take the dashboard down with it.
    let page_data = match read_page(&state, auth.shop_id, page, page_size).await {
        Ok(page_data) => page_data,
        Err(e) => {
            tracing::error!(error = %e, shop_id = auth.shop_id, "Notification query failed");
            NotificationPage::empty(page, page_size)
        }
    };

    Ok(Json(DataResponse { data: page_data }))
}
