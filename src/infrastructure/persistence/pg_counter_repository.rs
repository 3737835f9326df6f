//! PostgreSQL implementation of the visit-counter repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::VisitCounter;
use crate::domain::entities::visit_counter::COUNTER_ID;
use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CounterRow {
    id: i64,
    count: i64,
    updated_at: DateTime<Utc>,
}

impl From<CounterRow> for VisitCounter {
    fn from(row: CounterRow) -> Self {
        VisitCounter::new(row.id, row.count, row.updated_at)
    }
}

/// PostgreSQL repository for the single visit-counter row.
///
/// Relies on `INSERT .. ON CONFLICT DO UPDATE` so that concurrent increments
/// serialize inside the database and never lose updates, even when several
/// process instances share the table.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn increment(&self) -> Result<VisitCounter, AppError> {
        let row = sqlx::query_as::<_, CounterRow>(
            r#"
            INSERT INTO visit_counts (id, count)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE
                SET count = visit_counts.count + 1,
                    updated_at = NOW()
            RETURNING id, count, updated_at
            "#,
        )
        .bind(COUNTER_ID)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn current(&self) -> Result<Option<VisitCounter>, AppError> {
        let row = sqlx::query_as::<_, CounterRow>(
            r#"
            SELECT id, count, updated_at
            FROM visit_counts
            WHERE id = $1
            "#,
        )
        .bind(COUNTER_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
