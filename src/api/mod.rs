//! REST API for production plans.
//!
//! Provides two endpoints:
//! - `GET /` — usage hint
//! - `POST /productionplan` — computes a plan for the posted payload

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

pub use types::{ErrorResponse, MessageResponse};

/// Builds the axum router with all API routes.
///
/// The router is stateless: every request carries its own fleet and prices.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/productionplan", post(handlers::production_plan))
}

/// Binds to the given address and serves the API until the process stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, router()).await
}
