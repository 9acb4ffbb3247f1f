//! FlowKind enum naming every schema-bound generation flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The generation flows the backend can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowKind {
    Flights,
    Trains,
    Buses,
    Accommodations,
    LocationDetails,
    Chat,
    ReverseGeocode,
    Itinerary,
}

impl FlowKind {
    /// Returns all flows in a stable order.
    pub fn all() -> &'static [FlowKind] {
        &[
            FlowKind::Flights,
            FlowKind::Trains,
            FlowKind::Buses,
            FlowKind::Accommodations,
            FlowKind::LocationDetails,
            FlowKind::Chat,
            FlowKind::ReverseGeocode,
            FlowKind::Itinerary,
        ]
    }

    /// URL-safe name, e.g. `location-details`.
    pub fn slug(&self) -> &'static str {
        match self {
            FlowKind::Flights => "flights",
            FlowKind::Trains => "trains",
            FlowKind::Buses => "buses",
            FlowKind::Accommodations => "accommodations",
            FlowKind::LocationDetails => "location-details",
            FlowKind::Chat => "chat",
            FlowKind::ReverseGeocode => "reverse-geocode",
            FlowKind::Itinerary => "itinerary",
        }
    }

    /// Operation name sent to the model backend with each request.
    pub fn operation_name(&self) -> &'static str {
        match self {
            FlowKind::Flights => "compareFlights",
            FlowKind::Trains => "compareTrains",
            FlowKind::Buses => "compareBuses",
            FlowKind::Accommodations => "compareAccommodations",
            FlowKind::LocationDetails => "generateLocationDetails",
            FlowKind::Chat => "multilingualChatbot",
            FlowKind::ReverseGeocode => "reverseGeocode",
            FlowKind::Itinerary => "suggestTravelItinerary",
        }
    }

    /// Static message shown when generation fails for any reason.
    pub fn failure_message(&self) -> &'static str {
        match self {
            FlowKind::Flights => "Failed to fetch flight prices. Please try again.",
            FlowKind::Trains => "Failed to fetch train prices. Please try again.",
            FlowKind::Buses => "Failed to fetch bus prices. Please try again.",
            FlowKind::Accommodations => "Failed to fetch accommodation prices. Please try again.",
            FlowKind::LocationDetails => "Failed to load location details. Please try again.",
            FlowKind::Chat => "Sorry, I am having trouble connecting. Please try again later.",
            FlowKind::ReverseGeocode => "Failed to resolve this location. Please try again.",
            FlowKind::Itinerary => "Failed to generate itinerary. Please try again.",
        }
    }

    /// Returns true for the price comparison verticals.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            FlowKind::Flights | FlowKind::Trains | FlowKind::Buses | FlowKind::Accommodations
        )
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Unknown flow name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flow: {0}")]
pub struct UnknownFlow(pub String);

impl FromStr for FlowKind {
    type Err = UnknownFlow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowKind::all()
            .iter()
            .copied()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownFlow(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_8_flows() {
        assert_eq!(FlowKind::all().len(), 8);
    }

    #[test]
    fn slug_round_trips_through_from_str() {
        for kind in FlowKind::all() {
            assert_eq!(kind.slug().parse::<FlowKind>().unwrap(), *kind);
        }
        assert!("hotels".parse::<FlowKind>().is_err());
    }

    #[test]
    fn serde_uses_slug() {
        let json = serde_json::to_string(&FlowKind::LocationDetails).unwrap();
        assert_eq!(json, "\"location-details\"");
        let kind: FlowKind = serde_json::from_str("\"reverse-geocode\"").unwrap();
        assert_eq!(kind, FlowKind::ReverseGeocode);
    }

    #[test]
    fn failure_messages_ask_for_retry() {
        for kind in FlowKind::all() {
            assert!(kind.failure_message().contains("try again"), "{:?}", kind);
        }
    }

    #[test]
    fn only_price_verticals_are_comparisons() {
        let comparisons: Vec<_> = FlowKind::all().iter().filter(|k| k.is_comparison()).collect();
        assert_eq!(comparisons.len(), 4);
        assert!(!FlowKind::Chat.is_comparison());
    }
}
