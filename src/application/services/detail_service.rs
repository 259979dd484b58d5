//! Single-character history service backing the detail page.

use std::sync::Arc;

use crate::domain::entities::{Character, TrendSample};
use crate::domain::repositories::{CharacterRepository, TrendRepository};
use crate::error::AppError;

/// Maximum number of trend samples shown on the detail chart.
pub const HISTORY_LIMIT: i64 = 30;

/// Result of a detail lookup: the character (or absent) plus its history.
#[derive(Debug, Clone)]
pub struct CharacterDetail {
    pub character: Option<Character>,
    /// Ascending by date; at most [`HISTORY_LIMIT`] entries, the earliest
    /// ones when more exist.
    pub history: Vec<TrendSample>,
}

/// Service producing the per-character detail view.
///
/// The character lookup uses strict single-row fetch semantics; an absent id
/// or any fetch failure yields `character: None`, which the web layer renders
/// as the not-found placeholder rather than an error page.
pub struct DetailService {
    characters: Arc<dyn CharacterRepository>,
    trends: Arc<dyn TrendRepository>,
}

impl DetailService {
    /// Creates a new detail service over the injected repositories.
    pub fn new(characters: Arc<dyn CharacterRepository>, trends: Arc<dyn TrendRepository>) -> Self {
        Self { characters, trends }
    }

    /// Fetches one character and its chronological trend history.
    ///
    /// The two fetches are independent and issued concurrently. A history
    /// fetch failure degrades to an empty sequence; the page then renders a
    /// chart with no points.
    pub async fn character_with_history(&self, id: i64) -> CharacterDetail {
        let (character, history) =
            tokio::join!(self.characters.get(id), self.trends.history(id, HISTORY_LIMIT));

        let character = match character {
            Ok(character) => Some(character),
            Err(AppError::NotFound { .. }) => {
                tracing::debug!(id, "character not found");
                None
            }
            Err(e) => {
                tracing::warn!(error = ?e, id, "character fetch failed, rendering not-found");
                None
            }
        };

        let history = match history {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(error = ?e, id, "trend history fetch failed");
                Vec::new()
            }
        };

        CharacterDetail { character, history }
    }
}
