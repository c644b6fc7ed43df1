//! Handlers for the activity feed and its CSV export.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::activity::{describe, ActionCategory, ActionKind, TimeWindow};
use storefront_core::export;
use storefront_core::types::{DbId, Timestamp};
use storefront_db::models::activity_event::{ActivityFeedRow, ActivityFilter};
use storefront_db::repositories::ActivityEventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /activity`.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Restrict to one action category (`auth`, `products`, `inventory`, ...).
    pub category: Option<String>,
    /// Relative time window: `day`, `week`, or `month`. Absent = unbounded.
    pub window: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /activity/export`.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// One classified event as served on the feed.
#[derive(Debug, Serialize)]
pub struct ActivityFeedItem {
    pub id: DbId,
    pub action: String,
    pub category: ActionCategory,
    pub description: String,
    pub actor_name: Option<String>,
    pub actor_role: Option<String>,
    pub entity_table: Option<String>,
    pub entity_id: Option<DbId>,
    pub metadata: serde_json::Value,
    pub occurred_at: Timestamp,
}

impl From<ActivityFeedRow> for ActivityFeedItem {
    fn from(row: ActivityFeedRow) -> Self {
        let description = describe(
            &row.action,
            row.entity_table.as_deref(),
            row.entity_id,
            &row.metadata,
        );
        let category = ActionKind::parse(&row.action).category();
        ActivityFeedItem {
            id: row.id,
            action: row.action,
            category,
            description,
            actor_name: row.actor_name,
            actor_role: row.actor_role,
            entity_table: row.entity_table,
            entity_id: row.entity_id,
            metadata: row.metadata,
            occurred_at: row.occurred_at,
        }
    }
}

/// A page of the feed plus the total match count.
#[derive(Debug, Serialize)]
pub struct ActivityFeedPage {
    pub items: Vec<ActivityFeedItem>,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One bound of the export range: RFC 3339 when given, `fallback` when absent.
fn range_bound(raw: Option<&str>, fallback: Timestamp) -> AppResult<Timestamp> {
    let Some(raw) = raw else {
        return Ok(fallback);
    };
    raw.parse::<Timestamp>()
        .map_err(|_| AppError::BadRequest(format!("Not an RFC 3339 timestamp: {raw}")))
}

async fn read_page(
    state: &AppState,
    filter: &ActivityFilter,
) -> Result<ActivityFeedPage, sqlx::Error> {
    let rows = ActivityEventRepo::query_recent(&state.pool, filter).await?;
    let total = ActivityEventRepo::count(&state.pool, filter).await?;
    Ok(ActivityFeedPage {
        items: rows.into_iter().map(ActivityFeedItem::from).collect(),
        total,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/activity
///
/// The shop's recent activity, most recent first, with optional category and
/// time-window filters.
pub async fn feed(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<DataResponse<ActivityFeedPage>>> {
    let mut filter = ActivityFilter::for_shop(auth.shop_id);

    if let Some(raw) = params.category.as_deref() {
        let category = ActionCategory::parse_filter(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown category filter: {raw}")))?;
        filter.category = Some(category);
    }

    if let Some(raw) = params.window.as_deref() {
        let window = TimeWindow::parse_filter(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown time window: {raw}")))?;
        filter.since = Some(chrono::Utc::now() - chrono::Duration::days(window.days()));
    }

    filter.limit = params.limit;
    filter.offset = params.offset;

    // A read failure degrades to an empty page so the dashboard keeps
    // rendering while the log store is unavailable.
    let page = match read_page(&state, &filter).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(error = %e, shop_id = auth.shop_id, "Activity feed query failed");
            ActivityFeedPage {
                items: Vec::new(),
                total: 0,
            }
        }
    };

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/activity/export?from=X&to=Y
///
/// Download the shop's classified activity for a date range as CSV
/// (defaults to the last 30 days), oldest first.
pub async fn export(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let now = chrono::Utc::now();
    let from = range_bound(params.from.as_deref(), now - chrono::Duration::days(30))?;
    let to = range_bound(params.to.as_deref(), now)?;

    let rows = ActivityEventRepo::export_range(&state.pool, auth.shop_id, from, to).await?;

    let mut csv_output = String::from(export::EXPORT_HEADER);
    csv_output.push('\n');
    for row in &rows {
        let description = describe(
            &row.action,
            row.entity_table.as_deref(),
            row.entity_id,
            &row.metadata,
        );
        let line = export::csv_line(&[
            &row.occurred_at.to_rfc3339(),
            ActionKind::parse(&row.action).category().as_str(),
            row.actor_name.as_deref().unwrap_or("System"),
            row.actor_role.as_deref().unwrap_or(""),
            &row.action,
            &description,
            row.entity_table.as_deref().unwrap_or(""),
            &row.entity_id.map_or(String::new(), |id| id.to_string()),
            &row.metadata.to_string(),
        ]);
        csv_output.push_str(&line);
        csv_output.push('\n');
    }

    Ok(axum::response::Response::builder()
        .status(200)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            "attachment; filename=\"activity-log.csv\"",
        )
        .body(axum::body::Body::from(csv_output))
        .unwrap()
        .into_response())
}
