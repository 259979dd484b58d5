//! Repository trait for trend sample data access.

use crate::domain::entities::TrendSample;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for reading trend samples.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTrendRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendRepository: Send + Sync {
    /// Returns the most recent date present in the trend table, or `None`
    /// when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn latest_date(&self) -> Result<Option<NaiveDate>, AppError>;

    /// Fetches every sample recorded on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<TrendSample>, AppError>;

    /// Fetches up to `limit` samples for a character, ordered by date
    /// ascending. When more than `limit` rows exist, the earliest rows are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn history(&self, character_id: i64, limit: i64)
    -> Result<Vec<TrendSample>, AppError>;
}
