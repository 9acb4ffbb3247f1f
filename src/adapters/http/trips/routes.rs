//! HTTP routes for trip telemetry endpoints.

use axum::{routing::post, Router};

use super::handlers::{upload_trip, TripHandlers};

/// Creates the trip router, mounted under `/api/trips`.
pub fn trip_routes(handlers: TripHandlers) -> Router {
    Router::new()
        .route("/upload", post(upload_trip))
        .with_state(handlers)
}
