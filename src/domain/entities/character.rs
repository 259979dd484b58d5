//! Character entity representing a tracked fictional personality.

use chrono::{DateTime, Utc};

/// A tracked character with localized display metadata.
///
/// Rows are created and updated by an external collection process; this
/// service never writes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i64,
    /// Localized display name (`name_jp` column).
    pub name_jp: String,
    /// Localized source-work name (`work_jp` column).
    pub work_jp: String,
    pub created_at: DateTime<Utc>,
}
