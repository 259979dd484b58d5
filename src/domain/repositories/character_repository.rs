//! Repository trait for character data access.

use crate::domain::entities::Character;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading characters.
///
/// The `characters` table is owned by an external collection process; this
/// interface is read-only by design.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCharacterRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Fetches every character, unfiltered and unpaginated, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Character>, AppError>;

    /// Fetches exactly one character by id (strict single-row mode).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, id: i64) -> Result<Character, AppError>;
}
