//! Scalar aliases shared across the workspace.

/// Primary key type for every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Timestamps are stored and served in UTC; conversion to the shop's
/// local time is a display concern.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts in integer cents. Floats never touch money.
pub type Cents = i64;
