//! Visit counter service.

use std::sync::Arc;

use crate::domain::entities::VisitCounter;
use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Service wrapping the persisted visit counter.
///
/// All mutation goes through the repository's atomic upsert-increment;
/// the service never reads and writes in separate steps.
pub struct VisitService<R: CounterRepository> {
    repository: Arc<R>,
}

impl<R: CounterRepository> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Increments the counter and returns the post-increment value.
    ///
    /// Creates the counter with `count = 1` on the very first call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. The page degrades by
    /// showing no count rather than blocking.
    pub async fn increment(&self) -> Result<i64, AppError> {
        let counter = self.repository.increment().await?;
        Ok(counter.count)
    }

    /// Reads the counter without bumping it. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn current(&self) -> Result<Option<VisitCounter>, AppError> {
        self.repository.current().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::visit_counter::COUNTER_ID;
    use crate::domain::repositories::MockCounterRepository;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_increment_returns_post_increment_value() {
        let mut repo = MockCounterRepository::new();
        repo.expect_increment()
            .times(1)
            .returning(|| Ok(VisitCounter::new(COUNTER_ID, 7, Utc::now())));

        let service = VisitService::new(Arc::new(repo));

        assert_eq!(service.increment().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_increment_propagates_storage_errors() {
        let mut repo = MockCounterRepository::new();
        repo.expect_increment()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = VisitService::new(Arc::new(repo));

        let result = service.increment().await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_current_on_fresh_store() {
        let mut repo = MockCounterRepository::new();
        repo.expect_current().times(1).returning(|| Ok(None));

        let service = VisitService::new(Arc::new(repo));

        assert!(service.current().await.unwrap().is_none());
    }
}
