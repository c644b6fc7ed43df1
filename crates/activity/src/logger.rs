//! Best-effort activity event writer.
//!
//! [`ActivityLogger`] is constructed once at startup and handed to call
//! sites through application state. Feature code calls [`record`] after a
//! mutation succeeds; a failed audit write is logged and counted but never
//! propagated, so the business operation that triggered it stays committed.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::json;
use storefront_core::activity::action_types;
use storefront_core::types::DbId;
use storefront_db::models::activity_event::{ActivityEvent, CreateActivityEvent};
use storefront_db::models::login_session::LoginSession;
use storefront_db::repositories::{ActivityEventRepo, LoginSessionRepo};
use storefront_db::DbPool;

/// Writes activity events and login session brackets.
pub struct ActivityLogger {
    pool: DbPool,
    /// Events lost to failed writes since startup. Exposed so silent
    /// swallowing stays diagnosable.
    dropped: AtomicU64,
}

impl ActivityLogger {
    /// Create a logger over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            dropped: AtomicU64::new(0),
        }
    }

    // -----------------------------------------------------------------------
    // Appending events
    // -----------------------------------------------------------------------

    /// Append one event, returning the stored row.
    ///
    /// Callers that need the outcome (e.g. the low-stock scanner counting
    /// emitted alerts) use this; everything else goes through [`record`].
    ///
    /// [`record`]: ActivityLogger::record
    pub async fn append(&self, input: &CreateActivityEvent) -> Result<ActivityEvent, sqlx::Error> {
        ActivityEventRepo::insert(&self.pool, input).await
    }

    /// Append one event, swallowing any failure.
    ///
    /// The write is awaited, so on return the event is either stored or
    /// dropped; a dropped event is logged, counted, and otherwise absent
    /// from later queries. No retry is attempted.
    pub async fn record(&self, input: CreateActivityEvent) {
        if let Err(e) = self.append(&input).await {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::error!(
                error = %e,
                action = %input.action,
                shop_id = input.shop_id,
                "Failed to record activity event"
            );
        }
    }

    /// Number of events dropped by failed [`record`] writes since startup.
    ///
    /// [`record`]: ActivityLogger::record
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    // -----------------------------------------------------------------------
    // Session bracketing
    // -----------------------------------------------------------------------

    /// Open a login session and emit a `user_login` event.
    ///
    /// Best-effort like the rest of the logger: if the session row cannot be
    /// written the login itself still succeeds and `None` is returned.
    pub async fn track_login(&self, shop_id: DbId, user_id: DbId) -> Option<DbId> {
        let session = match LoginSessionRepo::open(&self.pool, shop_id, user_id).await {
            Ok(session) => session,
            Err(e) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::error!(error = %e, user_id, shop_id, "Failed to open login session");
                return None;
            }
        };

        let metadata = json!({
            "session_id": session.id,
            "login_time": session.logged_in_at.to_rfc3339(),
        });
        self.record(
            CreateActivityEvent::new(shop_id, action_types::USER_LOGIN)
                .with_actor(user_id)
                .with_entity("login_sessions", session.id)
                .with_metadata(metadata),
        )
        .await;

        Some(session.id)
    }

    /// Close a login session and emit a `user_logout` event.
    ///
    /// With a `session_id`, closes that session; without one, closes the
    /// user's most recent open session. When no open session matches, this
    /// is a no-op returning `None` (not an error): logout tracking tolerates
    /// logins that predate the session table or were dropped on write.
    pub async fn track_logout(
        &self,
        shop_id: DbId,
        user_id: DbId,
        session_id: Option<DbId>,
    ) -> Option<LoginSession> {
        let session =
            match LoginSessionRepo::close_open(&self.pool, shop_id, user_id, session_id).await {
                Ok(session) => session?,
                Err(e) => {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                    tracing::error!(error = %e, user_id, shop_id, "Failed to close login session");
                    return None;
                }
            };

        let mut metadata = json!({ "session_id": session.id });
        if let Some(logged_out_at) = session.logged_out_at {
            metadata["logout_time"] = json!(logged_out_at.to_rfc3339());
        }
        if let Some(minutes) = session.duration_minutes() {
            metadata["duration_minutes"] = json!(minutes);
        }
        self.record(
            CreateActivityEvent::new(shop_id, action_types::USER_LOGOUT)
                .with_actor(user_id)
                .with_entity("login_sessions", session.id)
                .with_metadata(metadata),
        )
        .await;

        Some(session)
    }
}
