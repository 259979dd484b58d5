//! PostgreSQL implementation of the trend repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::TrendSample;
use crate::domain::repositories::TrendRepository;
use crate::error::AppError;

/// PostgreSQL repository over the externally-owned `trend_data` table.
pub struct PgTrendRepository {
    pool: Arc<PgPool>,
}

impl PgTrendRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TrendSampleRow {
    id: i64,
    character_id: i64,
    date: NaiveDate,
    google_index: i32,
    x_post_count: i64,
}

impl From<TrendSampleRow> for TrendSample {
    fn from(row: TrendSampleRow) -> Self {
        Self {
            id: row.id,
            character_id: row.character_id,
            date: row.date,
            google_index: row.google_index,
            x_post_count: row.x_post_count,
        }
    }
}

#[async_trait]
impl TrendRepository for PgTrendRepository {
    async fn latest_date(&self) -> Result<Option<NaiveDate>, AppError> {
        // MAX over an empty table yields NULL, mapped to None.
        let date: Option<NaiveDate> = sqlx::query_scalar("SELECT MAX(date) FROM trend_data")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(date)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<TrendSample>, AppError> {
        let rows: Vec<TrendSampleRow> = sqlx::query_as(
            "SELECT id, character_id, date, google_index, x_post_count \
             FROM trend_data WHERE date = $1 ORDER BY id",
        )
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TrendSample::from).collect())
    }

    async fn history(
        &self,
        character_id: i64,
        limit: i64,
    ) -> Result<Vec<TrendSample>, AppError> {
        // Earliest rows win when more than `limit` exist.
        let rows: Vec<TrendSampleRow> = sqlx::query_as(
            "SELECT id, character_id, date, google_index, x_post_count \
             FROM trend_data WHERE character_id = $1 ORDER BY date ASC LIMIT $2",
        )
        .bind(character_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TrendSample::from).collect())
    }
}
