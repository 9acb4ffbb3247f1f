//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; [`app_router`] mounts them all.

pub mod error;
pub mod flows;
pub mod health;
pub mod trips;

use axum::{routing::get, Router};

pub use error::ErrorResponse;
pub use flows::{flow_routes, FlowHandlers};
pub use trips::{trip_routes, TripHandlers};

/// Builds the full API router. Middleware is layered on by the caller.
pub fn app_router(flows: FlowHandlers, trips: TripHandlers) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat/languages", get(flows::list_languages))
        .nest("/api/flows", flow_routes(flows))
        .nest("/api/trips", trip_routes(trips))
}
