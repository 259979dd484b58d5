//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{DetailService, ListingService};

/// Handler-visible application state.
///
/// Services are constructed once in [`crate::server::run`] with their
/// repositories injected; nothing here carries per-request state. The pool
/// handle is kept for the health probe only.
#[derive(Clone)]
pub struct AppState {
    pub listing: Arc<ListingService>,
    pub detail: Arc<DetailService>,
    pub db: PgPool,
}

impl AppState {
    /// Bundles the wired services and the pool handle.
    pub fn new(listing: Arc<ListingService>, detail: Arc<DetailService>, db: PgPool) -> Self {
        Self {
            listing,
            detail,
            db,
        }
    }
}
