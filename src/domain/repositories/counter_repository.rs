//! Repository trait for the persisted visit counter.

use crate::domain::entities::VisitCounter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single visit-counter row.
///
/// The increment operation must be atomic at the store level: the counter may
/// be shared by multiple process instances, so a read-then-write sequence
/// would lose updates under concurrent load.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_counter.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Atomically increments the counter, creating it with `count = 1` if absent.
    ///
    /// Returns the post-increment state. N concurrent calls yield exactly N
    /// increments with no duplicate observed values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment(&self) -> Result<VisitCounter, AppError>;

    /// Reads the counter without mutating it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(counter))` once the row exists
    /// - `Ok(None)` on a fresh store where nothing has been counted yet
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn current(&self) -> Result<Option<VisitCounter>, AppError>;
}
