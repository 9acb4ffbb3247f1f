//! Travel itinerary suggestion flow.

use serde::{Deserialize, Serialize};

use super::{Flow, FlowKind};
use crate::domain::foundation::{require_text, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryRequest {
    /// Destination in India.
    pub location: String,
    /// Free text: interests, budget in INR, travel style. May be empty.
    pub preferences: String,
}

impl ItineraryRequest {
    pub fn new(location: impl Into<String>, preferences: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            preferences: preferences.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySuggestion {
    /// Day-by-day plan with costs in Rs.
    pub itinerary: String,
}

pub struct SuggestItinerary;

impl Flow for SuggestItinerary {
    const KIND: FlowKind = FlowKind::Itinerary;
    type Input = ItineraryRequest;
    type Output = ItinerarySuggestion;

    fn validate_input(input: &ItineraryRequest) -> Result<(), ValidationError> {
        require_text("location", &input.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_may_be_blank() {
        assert!(SuggestItinerary::validate_input(&ItineraryRequest::new("Kerala", "")).is_ok());
        let prompt =
            SuggestItinerary::render_prompt(&ItineraryRequest::new("Kerala", "")).unwrap();
        assert!(prompt.contains("Location: Kerala"));
    }

    #[test]
    fn location_is_required() {
        let err = SuggestItinerary::validate_input(&ItineraryRequest::new(" ", "beaches"))
            .unwrap_err();
        assert_eq!(err.field(), "location");
    }
}
