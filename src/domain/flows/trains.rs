//! Train ticket price comparison flow.

use serde::{Deserialize, Serialize};

use super::{ComparisonResults, Flow, FlowKind};
use crate::domain::foundation::{require_text, Price, ValidationError, WebLink};

/// Train search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainSearch {
    pub origin: String,
    pub destination: String,
    pub journey_date: String,
}

impl TrainSearch {
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
pub struct TrainOption {
    pub train_name: String,
    /// e.g. `12951`
    pub train_number: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub platform: String,
    /// Standard class fare (AC 3 Tier or similar).
    pub price: Price,
    pub url: WebLink,
}

pub type TrainResults = ComparisonResults<TrainOption>;

pub struct CompareTrains;

impl Flow for CompareTrains {
    const KIND: FlowKind = FlowKind::Trains;
    type Input = TrainSearch;
    type Output = TrainResults;

    fn validate_input(input: &TrainSearch) -> Result<(), ValidationError> {
        require_text("origin", &input.origin)?;
        require_text("destination", &input.destination)?;
        require_text("journeyDate", &input.journey_date)
    }
}
