//! API Route Module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`orders`] - order management endpoints
//!
//! Sibling resources (employees, menu items, tables) have no HTTP surface;
//! their repositories back order validation and enrichment only.

pub mod health;
pub mod orders;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
