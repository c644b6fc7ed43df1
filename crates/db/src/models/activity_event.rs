//! Activity event store models and query filter types.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::activity::ActionCategory;
use storefront_core::types::{DbId, Timestamp};

/// An event row from the `activity_events` table. Rows are append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityEvent {
    pub id: DbId,
    pub shop_id: DbId,
    /// Null for system-generated events (e.g. low-stock sweeps).
    pub actor_id: Option<DbId>,
    pub action: String,
    pub entity_table: Option<String>,
    pub entity_id: Option<DbId>,
    pub metadata: serde_json::Value,
    pub occurred_at: Timestamp,
}

/// An event joined with its actor's display fields, as served on the feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityFeedRow {
    pub id: DbId,
    pub shop_id: DbId,
    pub actor_id: Option<DbId>,
    pub action: String,
    pub entity_table: Option<String>,
    pub entity_id: Option<DbId>,
    pub metadata: serde_json::Value,
    pub occurred_at: Timestamp,
    /// Username of the actor, if the event has one and the user still exists.
    pub actor_name: Option<String>,
    pub actor_role: Option<String>,
}

/// Input for appending one event.
///
/// Constructed via [`CreateActivityEvent::new`] with the two mandatory
/// fields (`shop_id`, `action`) and enriched with the builder methods
/// [`with_actor`](CreateActivityEvent::with_actor),
/// [`with_entity`](CreateActivityEvent::with_entity), and
/// [`with_metadata`](CreateActivityEvent::with_metadata).
#[derive(Debug, Clone)]
pub struct CreateActivityEvent {
    pub shop_id: DbId,
    pub actor_id: Option<DbId>,
    pub action: String,
    pub entity_table: Option<String>,
    pub entity_id: Option<DbId>,
    pub metadata: serde_json::Value,
    /// Defaults to the database clock when absent.
    pub occurred_at: Option<Timestamp>,
}

impl CreateActivityEvent {
    /// Create an event input with only the required fields.
    ///
    /// All optional fields default to `None` / empty object.
    pub fn new(shop_id: DbId, action: impl Into<String>) -> Self {
        Self {
            shop_id,
            actor_id: None,
            action: action.into(),
            entity_table: None,
            entity_id: None,
            metadata: serde_json::Value::Object(Default::default()),
            occurred_at: None,
        }
    }

    /// Attach the acting user to the event.
    pub fn with_actor(mut self, actor_id: DbId) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    /// Attach the affected record to the event.
    pub fn with_entity(mut self, table: impl Into<String>, id: DbId) -> Self {
        self.entity_table = Some(table.into());
        self.entity_id = Some(id);
        self
    }

    /// Set the JSON metadata payload for the event.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Filter for feed queries. `shop_id` is part of every predicate; the rest
/// are conjunctive and optional.
#[derive(Debug, Clone)]
pub struct ActivityFilter {
    pub shop_id: DbId,
    /// Restrict to one action category.
    pub category: Option<ActionCategory>,
    /// Only events at or after this instant (time-window filtering).
    pub since: Option<Timestamp>,
    /// Feed page length. Clamped by the repository.
    pub limit: Option<i64>,
    /// Rows to skip before the page. Negative values read as zero.
    pub offset: Option<i64>,
}

impl ActivityFilter {
    pub fn for_shop(shop_id: DbId) -> Self {
        ActivityFilter {
            shop_id,
            category: None,
            since: None,
            limit: None,
            offset: None,
        }
    }
}
