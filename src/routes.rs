//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`                  - Ranked character overview (public)
//! - `GET /characters/{id}`   - Character trend history (public)
//! - `GET /health`            - Health probe (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use axum::{Router, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
