//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{character_handler, listing_handler};
use axum::{Router, routing::get};

/// Dashboard page routes.
///
/// # Endpoints
///
/// - `GET /` - ranked character overview
/// - `GET /characters/{id}` - per-character trend history
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listing_handler))
        .route("/characters/{id}", get(character_handler))
}
