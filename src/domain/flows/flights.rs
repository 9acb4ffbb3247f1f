//! Flight price comparison flow.

use serde::{Deserialize, Serialize};

use super::{ComparisonResults, Flow, FlowKind};
use crate::domain::foundation::{require_text, Price, ValidationError, WebLink};

/// Flight search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightSearch {
    /// Origin city or airport code.
    pub origin: String,
    /// Destination city or airport code.
    pub destination: String,
    /// Departure date as typed by the user.
    pub departure_date: String,
}

impl FlightSearch {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure_date.into(),
        }
    }
}

/// One flight offer on one booking platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    pub airline: String,
    /// e.g. `6E 204`
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    /// e.g. `2h 15m`
    pub duration: String,
    pub platform: String,
    pub price: Price,
    pub url: WebLink,
}

pub type FlightResults = ComparisonResults<FlightOption>;

/// Marker for the flight comparison flow.
pub struct CompareFlights;

impl Flow for CompareFlights {
    const KIND: FlowKind = FlowKind::Flights;
    type Input = FlightSearch;
    type Output = FlightResults;

    fn validate_input(input: &FlightSearch) -> Result<(), ValidationError> {
        require_text("origin", &input.origin)?;
        require_text("destination", &input.destination)?;
        require_text("departureDate", &input.departure_date)
    }
}
