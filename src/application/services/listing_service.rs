//! Ranked-overview service backing the listing page.

use std::sync::Arc;

use crate::domain::entities::{Character, TrendSample};
use crate::domain::ranking::{RankedCharacter, rank_by_latest_index};
use crate::domain::repositories::{CharacterRepository, TrendRepository};

/// Service producing the ranked character overview.
///
/// Fetches the full character list and the latest-date trend samples, joins
/// them, and sorts by popularity. Fetch failures degrade to empty sets so the
/// page always renders.
pub struct ListingService {
    characters: Arc<dyn CharacterRepository>,
    trends: Arc<dyn TrendRepository>,
}

impl ListingService {
    /// Creates a new listing service over the injected repositories.
    pub fn new(characters: Arc<dyn CharacterRepository>, trends: Arc<dyn TrendRepository>) -> Self {
        Self { characters, trends }
    }

    /// Produces the ranked list for the listing page.
    ///
    /// The character fetch and the latest-sample fetch chain are independent
    /// and issued concurrently. Every fetched character appears exactly once
    /// in the result; characters without a latest sample rank with score 0.
    pub async fn rank_latest(&self) -> Vec<RankedCharacter> {
        let (characters, samples) =
            tokio::join!(self.fetch_characters(), self.fetch_latest_samples());
        rank_by_latest_index(characters, samples)
    }

    async fn fetch_characters(&self) -> Vec<Character> {
        match self.characters.list_all().await {
            Ok(characters) => characters,
            Err(e) => {
                tracing::warn!(error = ?e, "character fetch failed, listing degrades to empty");
                Vec::new()
            }
        }
    }

    /// Resolves the most recent trend date, then loads every sample on it.
    /// An empty trend table or a failure at either step yields no samples.
    async fn fetch_latest_samples(&self) -> Vec<TrendSample> {
        let date = match self.trends.latest_date().await {
            Ok(Some(date)) => date,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = ?e, "latest trend date fetch failed");
                return Vec::new();
            }
        };

        match self.trends.list_by_date(date).await {
            Ok(samples) => samples,
            Err(e) => {
                tracing::warn!(error = ?e, %date, "trend sample fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Character, TrendSample};
    use crate::domain::repositories::{MockCharacterRepository, MockTrendRepository};
    use crate::error::AppError;
    use chrono::{NaiveDate, Utc};
    use serde_json::json;

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name_jp: name.to_string(),
            work_jp: "テスト作品".to_string(),
            created_at: Utc::now(),
        }
    }

    fn sample(character_id: i64, date: NaiveDate, google_index: i32) -> TrendSample {
        TrendSample {
            id: character_id,
            character_id,
            date,
            google_index,
            x_post_count: 500,
        }
    }

    fn store_error() -> AppError {
        AppError::internal("Database error", json!({}))
    }

    #[tokio::test]
    async fn test_rank_latest_joins_and_sorts() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        let mut characters = MockCharacterRepository::new();
        characters
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![character(1, "A"), character(2, "B")]));

        let mut trends = MockTrendRepository::new();
        trends
            .expect_latest_date()
            .times(1)
            .returning(move || Ok(Some(date)));
        trends
            .expect_list_by_date()
            .withf(move |d| *d == date)
            .times(1)
            .returning(move |_| Ok(vec![sample(2, date, 80)]));

        let service = ListingService::new(Arc::new(characters), Arc::new(trends));
        let ranked = service.rank_latest().await;

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].character.id, 2);
        assert_eq!(ranked[0].google_index(), 80);
        assert_eq!(ranked[1].character.id, 1);
        assert_eq!(ranked[1].google_index(), 0);
    }

    #[tokio::test]
    async fn test_character_fetch_failure_degrades_to_empty() {
        let mut characters = MockCharacterRepository::new();
        characters
            .expect_list_all()
            .times(1)
            .returning(|| Err(store_error()));

        let mut trends = MockTrendRepository::new();
        trends.expect_latest_date().returning(|| Ok(None));

        let service = ListingService::new(Arc::new(characters), Arc::new(trends));
        assert!(service.rank_latest().await.is_empty());
    }

    #[tokio::test]
    async fn test_trend_failure_still_lists_every_character() {
        let mut characters = MockCharacterRepository::new();
        characters
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![character(1, "A"), character(2, "B")]));

        let mut trends = MockTrendRepository::new();
        trends
            .expect_latest_date()
            .times(1)
            .returning(|| Err(store_error()));

        let service = ListingService::new(Arc::new(characters), Arc::new(trends));
        let ranked = service.rank_latest().await;

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.google_index() == 0));
    }

    #[tokio::test]
    async fn test_empty_trend_table_skips_sample_fetch() {
        let mut characters = MockCharacterRepository::new();
        characters
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![character(1, "A")]));

        let mut trends = MockTrendRepository::new();
        trends.expect_latest_date().times(1).returning(|| Ok(None));
        trends.expect_list_by_date().times(0);

        let service = ListingService::new(Arc::new(characters), Arc::new(trends));
        let ranked = service.rank_latest().await;

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].latest.is_none());
    }
}
