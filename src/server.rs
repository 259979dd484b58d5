//! HTTP server initialization and runtime setup.
//!
//! Wires the connection pool, repositories, and services, then runs the Axum
//! server.

use crate::application::services::{DetailService, ListingService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgCharacterRepository, PgTrendRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (lazy: the external store may be absent at
///   boot, in which case every query fails and pages render empty)
/// - Repositories and page services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the pool options are invalid, the server bind fails,
/// or a server runtime error occurs. An unreachable database is NOT an
/// error here.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_lazy(&config.database_url)?;

    let pool_arc = Arc::new(pool.clone());
    let character_repository = Arc::new(PgCharacterRepository::new(pool_arc.clone()));
    let trend_repository = Arc::new(PgTrendRepository::new(pool_arc));

    let listing = Arc::new(ListingService::new(
        character_repository.clone(),
        trend_repository.clone(),
    ));
    let detail = Arc::new(DetailService::new(character_repository, trend_repository));

    let state = AppState::new(listing, detail, pool);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
