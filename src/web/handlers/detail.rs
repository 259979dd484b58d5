//! Character detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::entities::{Character, TrendSample};
use crate::state::AppState;

/// Template for the character detail page.
///
/// Renders `templates/character.html`: header text plus a dual-axis line
/// chart fed by the embedded `chart_data` JSON payload.
#[derive(Template, WebTemplate)]
#[template(path = "character.html")]
pub struct CharacterTemplate {
    pub character: Character,
    pub chart_data: String,
}

/// Placeholder page for an unknown character id.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct CharacterNotFoundTemplate {}

/// Renders the trend history page for one character.
///
/// # Endpoint
///
/// `GET /characters/{id}`
///
/// An absent character (or an unreachable store) renders the not-found
/// placeholder with status 404; a missing history renders an empty chart.
pub async fn character_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let detail = state.detail.character_with_history(id).await;

    match detail.character {
        Some(character) => CharacterTemplate {
            character,
            chart_data: chart_payload(&detail.history),
        }
        .into_response(),
        None => (StatusCode::NOT_FOUND, CharacterNotFoundTemplate {}).into_response(),
    }
}

/// Serializes the history into the JSON payload the chart script consumes:
/// shared date labels plus one array per series, index-aligned.
fn chart_payload(history: &[TrendSample]) -> String {
    let labels: Vec<String> = history.iter().map(|s| s.date.to_string()).collect();
    let google_index: Vec<i32> = history.iter().map(|s| s.google_index).collect();
    let x_post_count: Vec<i64> = history.iter().map(|s| s.x_post_count).collect();

    json!({
        "labels": labels,
        "google_index": google_index,
        "x_post_count": x_post_count,
    })
    .to_string()
}
