//! HTTP routes for flow endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_flow_schema, reverse_geocode, run_flow, FlowHandlers};
use crate::domain::flows::{
    CompareAccommodations, CompareBuses, CompareFlights, CompareTrains, GenerateLocationDetails,
    MultilingualChat, SuggestItinerary,
};

/// Creates the flow router, mounted under `/api/flows`.
pub fn flow_routes(handlers: FlowHandlers) -> Router {
    Router::new()
        .route("/flights", post(run_flow::<CompareFlights>))
        .route("/trains", post(run_flow::<CompareTrains>))
        .route("/buses", post(run_flow::<CompareBuses>))
        .route("/accommodations", post(run_flow::<CompareAccommodations>))
        .route("/location-details", post(run_flow::<GenerateLocationDetails>))
        .route("/chat", post(run_flow::<MultilingualChat>))
        .route("/reverse-geocode", post(reverse_geocode))
        .route("/itinerary", post(run_flow::<SuggestItinerary>))
        .route("/:flow/schema", get(get_flow_schema))
        .with_state(handlers)
}
