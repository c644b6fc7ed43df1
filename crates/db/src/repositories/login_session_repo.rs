//! Repository for the `login_sessions` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::login_session::LoginSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, shop_id, user_id, logged_in_at, logged_out_at";

/// Provides open/close operations for login sessions.
pub struct LoginSessionRepo;

impl LoginSessionRepo {
    /// Open a new session for a user, returning the created row.
    pub async fn open(
        pool: &PgPool,
        shop_id: DbId,
        user_id: DbId,
    ) -> Result<LoginSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO login_sessions (shop_id, user_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginSession>(&query)
            .bind(shop_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Close an open session, stamping `logged_out_at`.
    ///
    /// With a `session_id`, closes that session if it belongs to the user
    /// and is still open. Without one, closes the user's most recent open
    /// session. Returns `None` when there is nothing to close; closing a
    /// session twice does not mutate it again.
    pub async fn close_open(
        pool: &PgPool,
        shop_id: DbId,
        user_id: DbId,
        session_id: Option<DbId>,
    ) -> Result<Option<LoginSession>, sqlx::Error> {
        match session_id {
            Some(id) => {
                let query = format!(
                    "UPDATE login_sessions SET logged_out_at = NOW() \
                     WHERE id = $1 AND shop_id = $2 AND user_id = $3 \
                       AND logged_out_at IS NULL \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, LoginSession>(&query)
                    .bind(id)
                    .bind(shop_id)
                    .bind(user_id)
                    .fetch_optional(pool)
                    .await
            }
            None => {
                let query = format!(
                    "UPDATE login_sessions SET logged_out_at = NOW() \
                     WHERE id = (\
                         SELECT id FROM login_sessions \
                         WHERE shop_id = $1 AND user_id = $2 AND logged_out_at IS NULL \
                         ORDER BY logged_in_at DESC, id DESC \
                         LIMIT 1) \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, LoginSession>(&query)
                    .bind(shop_id)
                    .bind(user_id)
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    /// Find a session by id within a shop.
    pub async fn find_by_id(
        pool: &PgPool,
        shop_id: DbId,
        id: DbId,
    ) -> Result<Option<LoginSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM login_sessions WHERE id = $1 AND shop_id = $2");
        sqlx::query_as::<_, LoginSession>(&query)
            .bind(id)
            .bind(shop_id)
            .fetch_optional(pool)
            .await
    }

    /// All sessions for a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        shop_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<LoginSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM login_sessions \
             WHERE shop_id = $1 AND user_id = $2 \
             ORDER BY logged_in_at DESC, id DESC"
        );
        sqlx::query_as::<_, LoginSession>(&query)
            .bind(shop_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
