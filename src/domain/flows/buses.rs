//! Bus ticket price comparison flow.

use serde::{Deserialize, Serialize};

use super::{ComparisonResults, Flow, FlowKind};
use crate::domain::foundation::{require_text, Price, ValidationError, WebLink};

/// Bus search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusSearch {
    pub origin: String,
    pub destination: String,
    pub journey_date: String,
}

impl BusSearch {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        journey_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            journey_date: journey_date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusOption {
    pub operator: String,
    /// e.g. `A/C Sleeper (2+1)`
    pub bus_type: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub platform: String,
    pub price: Price,
    pub url: WebLink,
}

pub type BusResults = ComparisonResults<BusOption>;

pub struct CompareBuses;

impl Flow for CompareBuses {
    const KIND: FlowKind = FlowKind::Buses;
    type Input = BusSearch;
    type Output = BusResults;

    fn validate_input(input: &BusSearch) -> Result<(), ValidationError> {
        require_text("origin", &input.origin)?;
        require_text("destination", &input.destination)?;
        require_text("journeyDate", &input.journey_date)
    }
}
