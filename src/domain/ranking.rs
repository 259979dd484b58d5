//! Ranking transform for the listing page.
//!
//! Joins the latest-date trend samples onto the character list and orders the
//! result by popularity.

use std::collections::HashMap;

use crate::domain::entities::{Character, TrendSample};

/// A character paired with its latest trend sample, if one exists.
#[derive(Debug, Clone)]
pub struct RankedCharacter {
    pub character: Character,
    pub latest: Option<TrendSample>,
}

impl RankedCharacter {
    /// Latest search-interest score; characters without a sample rank as 0.
    pub fn google_index(&self) -> i32 {
        self.latest.as_ref().map_or(0, |s| s.google_index)
    }
}

/// Joins `samples` onto `characters` by character id and sorts descending by
/// the latest `google_index`.
///
/// The join is keyed by a map from character id to sample; when duplicate
/// samples exist for one character the first one in fetch order wins. The
/// sort is stable, so characters with equal scores (including the absent = 0
/// case) keep their original fetch order. Every input character appears
/// exactly once in the output.
pub fn rank_by_latest_index(
    characters: Vec<Character>,
    samples: Vec<TrendSample>,
) -> Vec<RankedCharacter> {
    let mut latest_by_character: HashMap<i64, TrendSample> =
        HashMap::with_capacity(samples.len());
    for sample in samples {
        latest_by_character.entry(sample.character_id).or_insert(sample);
    }

    let mut ranked: Vec<RankedCharacter> = characters
        .into_iter()
        .map(|character| {
            let latest = latest_by_character.remove(&character.id);
            RankedCharacter { character, latest }
        })
        .collect();

    ranked.sort_by(|a, b| b.google_index().cmp(&a.google_index()));
    ranked
}
