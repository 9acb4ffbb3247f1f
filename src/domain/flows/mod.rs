//! Flows - schema-bound generation contracts for each travel vertical.
//!
//! Every flow is the same triple: a typed input, a prompt template filled
//! from that input, and a typed output that the model's JSON must satisfy.
//! The [`Flow`] trait captures the triple; `FlowRunner` in the application
//! layer executes any flow generically.
//!
//! Output JSON Schemas live in `schemas/` and are embedded by the schema
//! validator adapter.

mod accommodations;
mod buses;
mod chatbot;
mod comparison;
mod flights;
mod flow;
mod flow_kind;
mod itinerary;
mod location_details;
mod payload;
pub mod prompt;
mod reverse_geocode;
pub mod templates;
mod trains;

pub use accommodations::{
    AccommodationOption, AccommodationResults, AccommodationSearch, CompareAccommodations,
    PlatformPrice,
};
pub use buses::{BusOption, BusResults, BusSearch, CompareBuses};
pub use chatbot::{
    language, ChatMessage, ChatReply, MultilingualChat, SupportedLanguage, SUPPORTED_LANGUAGES,
};
pub use comparison::{result_count_bounds, ComparisonResults};
pub use flights::{CompareFlights, FlightOption, FlightResults, FlightSearch};
pub use flow::Flow;
pub use flow_kind::{FlowKind, UnknownFlow};
pub use itinerary::{ItineraryRequest, ItinerarySuggestion, SuggestItinerary};
pub use location_details::{
    GenerateLocationDetails, LocationDetails, LocationQuery, NewsItem, StaySummary, TouristPlace,
    WeatherDay, WeatherIcon, FORECAST_DAYS,
};
pub use payload::{extract_json_object, PayloadError};
pub use prompt::PromptError;
pub use reverse_geocode::{GeocodeQuery, PlaceName, ReverseGeocode};
pub use trains::{CompareTrains, TrainOption, TrainResults, TrainSearch};
