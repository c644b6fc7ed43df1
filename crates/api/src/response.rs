//! Response envelope for derived read surfaces.
//!
//! Plain CRUD endpoints return entity JSON directly; the projections built
//! on top of the activity store (feed, notifications, low-stock listing,
//! scan results, `/auth/me`) wrap their payload in `{ "data": ... }` so
//! dashboard widgets consume one shape.

use serde::Serialize;

/// `{ "data": T }` wrapper for projection responses.
///
/// ```ignore
/// Ok(Json(DataResponse { data: page }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
