//! PostgreSQL implementation of the character repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Character;
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// PostgreSQL repository over the externally-owned `characters` table.
pub struct PgCharacterRepository {
    pool: Arc<PgPool>,
}

impl PgCharacterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: i64,
    name_jp: String,
    work_jp: String,
    created_at: DateTime<Utc>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            name_jp: row.name_jp,
            work_jp: row.work_jp,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn list_all(&self) -> Result<Vec<Character>, AppError> {
        let rows: Vec<CharacterRow> = sqlx::query_as(
            "SELECT id, name_jp, work_jp, created_at FROM characters ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Character::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Character, AppError> {
        // fetch_one: zero rows is an explicit NotFound, not a silent None.
        let row: CharacterRow = sqlx::query_as(
            "SELECT id, name_jp, work_jp, created_at FROM characters WHERE id = $1",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
