//! Integration tests for the flow runner.
//!
//! Each flow runs against the mock generation backend and the real schema
//! validator:
//! 1. Valid payloads come back typed
//! 2. Payloads that break a schema rule are rejected as schema failures
//! 3. Invalid requests never reach the backend

mod common;

use std::sync::Arc;

use serde_json::json;

use questify::adapters::ai::{MockAIProvider, MockError};
use questify::adapters::validation::JsonSchemaValidator;
use questify::application::handlers::flows::{FlowError, FlowRunner};
use questify::domain::flows::{
    AccommodationSearch, BusSearch, ChatMessage, CompareAccommodations, CompareBuses,
    CompareFlights, CompareTrains, FlightSearch, FlowKind, GenerateLocationDetails,
    ItineraryRequest, LocationQuery, MultilingualChat, SuggestItinerary, TrainSearch, WeatherIcon,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn runner(provider: &MockAIProvider) -> FlowRunner {
    FlowRunner::new(Arc::new(provider.clone()), Arc::new(JsonSchemaValidator::new()))
}

fn flight_search() -> FlightSearch {
    FlightSearch::new("Delhi", "Goa", "2024-12-20")
}

// =============================================================================
// Comparison flows
// =============================================================================

#[tokio::test]
async fn train_comparison_returns_all_offers() {
    let provider = MockAIProvider::new().with_json_response(&common::train_results(7));

    let results = runner(&provider)
        .run::<CompareTrains>(TrainSearch::new("New Delhi", "Mumbai Central", "2024-12-20"))
        .await
        .unwrap();

    assert_eq!(results.len(), 7);
    assert_eq!(results.results[0].train_number, "12951");
    assert_eq!(results.results[0].price.as_str(), "₹2,105");
}

#[tokio::test]
async fn bus_comparison_accepts_upper_bound() {
    let provider = MockAIProvider::new().with_json_response(&common::bus_results(10));

    let results = runner(&provider)
        .run::<CompareBuses>(BusSearch::new("Bengaluru", "Kochi", "2024-11-02"))
        .await
        .unwrap();

    assert_eq!(results.len(), 10);
}

#[tokio::test]
async fn more_than_ten_results_are_rejected() {
    let provider = MockAIProvider::new().with_json_response(&common::flight_results(11));

    let err = runner(&provider)
        .run::<CompareFlights>(flight_search())
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Schema(_)));
}

#[tokio::test]
async fn price_without_rupee_glyph_is_rejected() {
    let mut payload = common::flight_results(5);
    payload["results"][2]["price"] = json!("Rs. 4,999");
    let provider = MockAIProvider::new().with_json_response(&payload);

    let err = runner(&provider)
        .run::<CompareFlights>(flight_search())
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Schema(_)));
}

#[tokio::test]
async fn price_padded_before_glyph_is_rejected() {
    let mut payload = common::flight_results(5);
    for i in 0..5 {
        payload["results"][i]["price"] = json!("  ₹5,499");
    }
    let provider = MockAIProvider::new().with_json_response(&payload);

    let err = runner(&provider)
        .run::<CompareFlights>(flight_search())
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Schema(_)));
}

#[tokio::test]
async fn returned_prices_start_with_rupee_glyph() {
    let provider = MockAIProvider::new().with_json_response(&common::flight_results(6));

    let results = runner(&provider)
        .run::<CompareFlights>(flight_search())
        .await
        .unwrap();

    assert!(results
        .results
        .iter()
        .all(|flight| flight.price.as_str().starts_with('₹')));
}

#[tokio::test]
async fn relative_booking_link_is_rejected() {
    let mut payload = common::train_results(5);
    payload["results"][0]["url"] = json!("/trains/search");
    let provider = MockAIProvider::new().with_json_response(&payload);

    let err = runner(&provider)
        .run::<CompareTrains>(TrainSearch::new("Chennai", "Madurai", "2024-10-01"))
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Schema(_)));
}

#[tokio::test]
async fn single_hotel_result_is_accepted() {
    let provider = MockAIProvider::new().with_json_response(&common::accommodation_results(1));

    let results = runner(&provider)
        .run::<CompareAccommodations>(AccommodationSearch::new(
            "Taj Malabar, Kochi",
            "2024-12-24",
            "2024-12-27",
        ))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results.results[0].platforms.len(), 2);
}

#[tokio::test]
async fn rating_above_five_is_rejected() {
    let mut payload = common::accommodation_results(2);
    payload["results"][1]["rating"] = json!(5.5);
    let provider = MockAIProvider::new().with_json_response(&payload);

    let err = runner(&provider)
        .run::<CompareAccommodations>(AccommodationSearch::new(
            "Goa",
            "2024-12-24",
            "2024-12-27",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Schema(_)));
}

#[tokio::test]
async fn hotel_search_without_check_in_is_not_sent() {
    let provider = MockAIProvider::new().with_json_response(&common::accommodation_results(3));

    let err = runner(&provider)
        .run::<CompareAccommodations>(AccommodationSearch::new("Goa", "", "2024-12-27"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(provider.call_count(), 0);
}

// =============================================================================
// Location details, chat, itinerary
// =============================================================================

#[tokio::test]
async fn location_details_have_three_day_forecast() {
    let provider = MockAIProvider::new().with_json_response(&common::location_details());

    let details = runner(&provider)
        .run::<GenerateLocationDetails>(LocationQuery::new("Munnar"))
        .await
        .unwrap();

    assert_eq!(details.weather.len(), 3);
    assert_eq!(details.weather[2].icon, WeatherIcon::CloudRain);
    assert_eq!(details.tourist_places[0].name, "Eravikulam National Park");
}

#[tokio::test]
async fn unknown_weather_icon_is_rejected() {
    let mut payload = common::location_details();
    payload["weather"][0]["icon"] = json!("Snow");
    let provider = MockAIProvider::new().with_json_response(&payload);

    let err = runner(&provider)
        .run::<GenerateLocationDetails>(LocationQuery::new("Munnar"))
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Schema(_)));
}

#[tokio::test]
async fn chat_in_unsupported_language_is_not_sent() {
    let provider = MockAIProvider::new();

    let err = runner(&provider)
        .run::<MultilingualChat>(ChatMessage::new("Wo ist der Bahnhof?", "de"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn itinerary_without_preferences_is_generated() {
    let provider = MockAIProvider::new().with_json_response(&json!({
        "itinerary": "Day 1: Amer Fort (Rs. 200 entry).\nDay 2: City Palace (Rs. 300)."
    }));

    let suggestion = runner(&provider)
        .run::<SuggestItinerary>(ItineraryRequest::new("Jaipur", ""))
        .await
        .unwrap();

    assert!(suggestion.itinerary.starts_with("Day 1"));
    let prompt = provider.get_calls()[0]
        .last_user_message()
        .unwrap()
        .to_string();
    assert!(prompt.contains("Jaipur"));
}

// =============================================================================
// Failure handling
// =============================================================================

#[tokio::test]
async fn backend_failures_share_the_static_message() {
    let provider = MockAIProvider::new()
        .with_error(MockError::RateLimited {
            retry_after_secs: 20,
        })
        .with_response("not json at all");

    let backend = runner(&provider)
        .run::<CompareFlights>(flight_search())
        .await
        .unwrap_err();
    let schema = runner(&provider)
        .run::<CompareFlights>(flight_search())
        .await
        .unwrap_err();

    assert!(matches!(backend, FlowError::Backend(_)));
    assert!(matches!(schema, FlowError::Schema(_)));
    assert_eq!(
        backend.client_message(FlowKind::Flights),
        schema.client_message(FlowKind::Flights)
    );
}

#[tokio::test]
async fn failed_call_is_not_retried() {
    let provider = MockAIProvider::new().with_error(MockError::Network {
        message: "connection reset".to_string(),
    });

    let _ = runner(&provider).run::<CompareFlights>(flight_search()).await;

    assert_eq!(provider.call_count(), 1);
}
