//! Login session arithmetic.

use crate::types::Timestamp;

/// Whole minutes between login and logout, truncated, never negative.
///
/// Clock skew between the two writes can make the raw difference negative;
/// a session length below zero is meaningless, so it floors at 0.
pub fn duration_minutes(login_at: Timestamp, logout_at: Timestamp) -> i64 {
    (logout_at - login_at).num_minutes().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn whole_minutes_truncate() {
        let login = Utc::now();
        assert_eq!(duration_minutes(login, login + Duration::seconds(90)), 1);
        assert_eq!(duration_minutes(login, login + Duration::seconds(59)), 0);
        assert_eq!(duration_minutes(login, login + Duration::minutes(42)), 42);
    }

    #[test]
    fn skewed_clocks_floor_at_zero() {
        let login = Utc::now();
        assert_eq!(duration_minutes(login, login - Duration::minutes(5)), 0);
    }
}
