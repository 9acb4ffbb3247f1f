//! HTTP adapter for trip telemetry endpoints.

mod handlers;
mod routes;

pub use handlers::TripHandlers;
pub use routes::trip_routes;
