//! Ranked-overview page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::ranking::RankedCharacter;
use crate::state::AppState;

/// Template for the ranked listing page.
///
/// Renders `templates/listing.html`: one linked card per character, ordered
/// by the latest trend index.
#[derive(Template, WebTemplate)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub ranking: Vec<RankedCharacter>,
}

/// Renders the ranked character overview.
///
/// # Endpoint
///
/// `GET /`
///
/// A store failure renders the same page with zero cards; the handler never
/// errors.
pub async fn listing_handler(State(state): State<AppState>) -> impl IntoResponse {
    let ranking = state.listing.rank_latest().await;
    ListingTemplate { ranking }
}
