//! Repository for the `activity_events` table.
//!
//! The table is append-only: this repo inserts and reads, never updates or
//! deletes. Feed reads join the actor's display fields so the UI does not
//! need a second query per row.

use sqlx::PgPool;
use storefront_core::notify::ALERT_WORTHY_ACTIONS;
use storefront_core::types::{DbId, Timestamp};

use crate::models::activity_event::{
    ActivityEvent, ActivityFeedRow, ActivityFilter, CreateActivityEvent,
};

/// Default and maximum feed page lengths.
const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for plain `activity_events` SELECT queries.
const COLUMNS: &str = "\
    id, shop_id, actor_id, action, entity_table, entity_id, \
    metadata, occurred_at";

/// Column list for feed queries joining the actor (`e` = events, `u` = users).
const FEED_COLUMNS: &str = "\
    e.id, e.shop_id, e.actor_id, e.action, e.entity_table, e.entity_id, \
    e.metadata, e.occurred_at, u.username AS actor_name, u.role AS actor_role";

// ---------------------------------------------------------------------------
// ActivityEventRepo
// ---------------------------------------------------------------------------

/// Append and read operations for activity events.
pub struct ActivityEventRepo;

impl ActivityEventRepo {
    /// Append one event, returning the stored row.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateActivityEvent,
    ) -> Result<ActivityEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_events \
                 (shop_id, actor_id, action, entity_table, entity_id, metadata, occurred_at) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityEvent>(&query)
            .bind(input.shop_id)
            .bind(input.actor_id)
            .bind(&input.action)
            .bind(&input.entity_table)
            .bind(input.entity_id)
            .bind(&input.metadata)
            .bind(input.occurred_at)
            .fetch_one(pool)
            .await
    }

    /// Query recent events for one shop, most recent first.
    ///
    /// Ordering is `occurred_at DESC` with `id DESC` as a stable tiebreak for
    /// rows written in the same instant.
    pub async fn query_recent(
        pool: &PgPool,
        filter: &ActivityFilter,
    ) -> Result<Vec<ActivityFeedRow>, sqlx::Error> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = filter.offset.unwrap_or(0).max(0);

        let (where_clause, binds) = feed_predicates(filter);
        let limit_idx = binds.len() + 1;
        let offset_idx = binds.len() + 2;

        let query = format!(
            "SELECT {FEED_COLUMNS} FROM activity_events e \
             LEFT JOIN users u ON u.id = e.actor_id \
             {where_clause} \
             ORDER BY e.occurred_at DESC, e.id DESC \
             LIMIT ${limit_idx} OFFSET ${offset_idx}"
        );

        let mut q = sqlx::query_as::<_, ActivityFeedRow>(&query);
        for bind in &binds {
            q = match bind {
                FilterBind::Shop(id) => q.bind(*id),
                FilterBind::Tags(tags) => q.bind(tags.as_slice()),
                FilterBind::Since(ts) => q.bind(*ts),
            };
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count events matching the given filter (ignores the filter's limit).
    pub async fn count(pool: &PgPool, filter: &ActivityFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, binds) = feed_predicates(filter);

        let query = format!("SELECT COUNT(*)::BIGINT FROM activity_events e {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for bind in &binds {
            q = match bind {
                FilterBind::Shop(id) => q.bind(*id),
                FilterBind::Tags(tags) => q.bind(tags.as_slice()),
                FilterBind::Since(ts) => q.bind(*ts),
            };
        }
        q.fetch_one(pool).await
    }

    /// One page of alert-worthy events for the dashboard notification
    /// widget, most recent first. `offset` past the end yields an empty page.
    pub async fn notifications(
        pool: &PgPool,
        shop_id: DbId,
        page_size: i64,
        offset: i64,
    ) -> Result<Vec<ActivityFeedRow>, sqlx::Error> {
        let query = format!(
            "SELECT {FEED_COLUMNS} FROM activity_events e \
             LEFT JOIN users u ON u.id = e.actor_id \
             WHERE e.shop_id = $1 AND e.action = ANY($2) \
             ORDER BY e.occurred_at DESC, e.id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, ActivityFeedRow>(&query)
            .bind(shop_id)
            .bind(alert_worthy_tags())
            .bind(page_size)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of alert-worthy events for a shop (for page count math).
    pub async fn count_notifications(pool: &PgPool, shop_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM activity_events \
             WHERE shop_id = $1 AND action = ANY($2)",
        )
        .bind(shop_id)
        .bind(alert_worthy_tags())
        .fetch_one(pool)
        .await
    }

    /// Export all events for a shop within a time range, oldest first.
    pub async fn export_range(
        pool: &PgPool,
        shop_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<ActivityFeedRow>, sqlx::Error> {
        let query = format!(
            "SELECT {FEED_COLUMNS} FROM activity_events e \
             LEFT JOIN users u ON u.id = e.actor_id \
             WHERE e.shop_id = $1 AND e.occurred_at >= $2 AND e.occurred_at <= $3 \
             ORDER BY e.occurred_at ASC, e.id ASC"
        );
        sqlx::query_as::<_, ActivityFeedRow>(&query)
            .bind(shop_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Feed filtering
// ---------------------------------------------------------------------------

/// The alert-worthy action list as an owned vec for `= ANY($n)` binding.
fn alert_worthy_tags() -> Vec<String> {
    ALERT_WORTHY_ACTIONS.iter().map(|s| s.to_string()).collect()
}

/// Bind values a feed filter can contribute, in predicate order.
enum FilterBind {
    Shop(DbId),
    Tags(Vec<String>),
    Since(Timestamp),
}

/// Expand an [`ActivityFilter`] into its WHERE clause and bind values.
///
/// The shop predicate is unconditional: every feed read goes through here,
/// so no query shape can reach another shop's events.
fn feed_predicates(filter: &ActivityFilter) -> (String, Vec<FilterBind>) {
    let mut clause = String::from("WHERE e.shop_id = $1");
    let mut binds = vec![FilterBind::Shop(filter.shop_id)];

    if let Some(category) = filter.category {
        clause.push_str(&format!(" AND e.action = ANY(${})", binds.len() + 1));
        binds.push(FilterBind::Tags(
            category.action_tags().iter().map(|s| s.to_string()).collect(),
        ));
    }
    if let Some(since) = filter.since {
        clause.push_str(&format!(" AND e.occurred_at >= ${}", binds.len() + 1));
        binds.push(FilterBind::Since(since));
    }

    (clause, binds)
}
