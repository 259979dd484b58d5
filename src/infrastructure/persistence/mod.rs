//! PostgreSQL repository implementations.

mod pg_character_repository;
mod pg_trend_repository;

pub use pg_character_repository::PgCharacterRepository;
pub use pg_trend_repository::PgTrendRepository;
