//! Visit counter entity backing the page-view statistic.

use chrono::{DateTime, Utc};

/// Identifier of the single counter row.
///
/// The counter is a degenerate one-row table; every increment targets this id.
pub const COUNTER_ID: i64 = 1;

/// The persisted visit counter.
///
/// Exactly one row exists for [`COUNTER_ID`] at any time. `count` is
/// monotonically non-decreasing and is only ever mutated through the
/// repository's atomic upsert-increment.
#[derive(Debug, Clone)]
pub struct VisitCounter {
    pub id: i64,
    pub count: i64,
    pub updated_at: DateTime<Utc>,
}

impl VisitCounter {
    /// Creates a new VisitCounter instance.
    pub fn new(id: i64, count: i64, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            count,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_visit_counter_creation() {
        let now = Utc::now();
        let counter = VisitCounter::new(COUNTER_ID, 42, now);

        assert_eq!(counter.id, 1);
        assert_eq!(counter.count, 42);
        assert_eq!(counter.updated_at, now);
    }
}
