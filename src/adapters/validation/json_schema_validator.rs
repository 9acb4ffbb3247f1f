//! JSON Schema Validator - Implementation of FlowSchemaValidator.
//!
//! Uses manual validation against embedded JSON Schema definitions.
//! The schema documents are served verbatim for introspection; the rules
//! they declare are enforced here without an external schema engine.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::domain::flows::{result_count_bounds, FlowKind, WeatherIcon, FORECAST_DAYS};
use crate::domain::foundation::{check_price, check_web_link, StarRating};
use crate::ports::{FlowSchemaValidator, SchemaValidationError};

type Object = Map<String, Value>;

const FLIGHT_FIELDS: &[&str] = &[
    "airline",
    "flightNumber",
    "departure",
    "arrival",
    "duration",
    "platform",
];
const TRAIN_FIELDS: &[&str] = &[
    "trainName",
    "trainNumber",
    "departure",
    "arrival",
    "duration",
    "platform",
];
const BUS_FIELDS: &[&str] = &[
    "operator",
    "busType",
    "departure",
    "arrival",
    "duration",
    "platform",
];

/// JSON Schema-based validator implementation.
///
/// Schemas are embedded in the binary via `include_str!`.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` and can be shared across threads.
pub struct JsonSchemaValidator {}

impl Default for JsonSchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self {}
    }

    fn validate_flow(&self, kind: FlowKind, output: &Value) -> Result<(), SchemaValidationError> {
        match kind {
            FlowKind::Flights => self.validate_route_results(kind, output, FLIGHT_FIELDS),
            FlowKind::Trains => self.validate_route_results(kind, output, TRAIN_FIELDS),
            FlowKind::Buses => self.validate_route_results(kind, output, BUS_FIELDS),
            FlowKind::Accommodations => self.validate_accommodations(output),
            FlowKind::LocationDetails => self.validate_location_details(output),
            FlowKind::Chat => self.validate_single_text(output, "translatedResponse"),
            FlowKind::ReverseGeocode => self.validate_single_text(output, "placeName"),
            FlowKind::Itinerary => self.validate_single_text(output, "itinerary"),
        }
    }

    // =========================================================================
    // Flow-specific validators
    // =========================================================================

    /// Flights, trains and buses share one shape apart from their text fields.
    fn validate_route_results(
        &self,
        kind: FlowKind,
        output: &Value,
        text_fields: &[&str],
    ) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(output, "root")?;
        let results = self.require_array(obj, "results", "root")?;
        self.require_len(results, "results", result_count_bounds(kind).into_inner())?;

        let errors: Vec<_> = results
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                self.validate_route_option(item, &format!("results[{}]", i), text_fields)
                    .err()
            })
            .collect();
        Self::collect_errors(errors)
    }

    fn validate_route_option(
        &self,
        value: &Value,
        path: &str,
        text_fields: &[&str],
    ) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(value, path)?;
        for field in text_fields {
            self.require_non_empty_string(obj, field, path)?;
        }
        self.require_price(obj, "price", path)?;
        self.require_url(obj, "url", path)
    }

    fn validate_accommodations(&self, output: &Value) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(output, "root")?;
        let results = self.require_array(obj, "results", "root")?;
        self.require_len(
            results,
            "results",
            result_count_bounds(FlowKind::Accommodations).into_inner(),
        )?;

        let errors: Vec<_> = results
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                self.validate_accommodation(item, &format!("results[{}]", i))
                    .err()
            })
            .collect();
        Self::collect_errors(errors)
    }

    fn validate_accommodation(&self, value: &Value, path: &str) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(value, path)?;
        self.require_non_empty_string(obj, "name", path)?;
        self.require_rating(obj, "rating", path)?;
        self.require_url(obj, "imageUrl", path)?;
        self.require_non_empty_string(obj, "imageHint", path)?;

        let platforms_path = format!("{}.platforms", path);
        let platforms = self.require_array(obj, "platforms", path)?;
        self.require_non_empty_array(platforms, &platforms_path)?;
        for (i, offer) in platforms.iter().enumerate() {
            let offer_path = format!("{}[{}]", platforms_path, i);
            let offer = self.require_object(offer, &offer_path)?;
            self.require_non_empty_string(offer, "platform", &offer_path)?;
            self.require_price(offer, "price", &offer_path)?;
            self.require_url(offer, "url", &offer_path)?;
        }
        Ok(())
    }

    fn validate_location_details(&self, output: &Value) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(output, "root")?;

        let mut errors = Vec::new();
        for field in &[
            "name",
            "description",
            "heroImageHint",
            "accommodations",
            "weather",
            "news",
            "touristPlaces",
        ] {
            if let Err(e) = self.require_field(obj, field, "root") {
                errors.push(e);
            }
        }
        Self::collect_errors(errors)?;

        self.require_non_empty_string(obj, "name", "root")?;
        self.require_non_empty_string(obj, "description", "root")?;
        self.require_non_empty_string(obj, "heroImageHint", "root")?;

        let stays = self.require_array(obj, "accommodations", "root")?;
        self.require_non_empty_array(stays, "accommodations")?;
        for (i, stay) in stays.iter().enumerate() {
            let path = format!("accommodations[{}]", i);
            let stay = self.require_object(stay, &path)?;
            self.require_non_empty_string(stay, "name", &path)?;
            self.require_price(stay, "price", &path)?;
            self.require_non_empty_string(stay, "platform", &path)?;
            self.require_rating(stay, "rating", &path)?;
        }

        let weather = self.require_array(obj, "weather", "root")?;
        self.require_len(weather, "weather", (FORECAST_DAYS, FORECAST_DAYS))?;
        for (i, day) in weather.iter().enumerate() {
            let path = format!("weather[{}]", i);
            let day = self.require_object(day, &path)?;
            self.require_non_empty_string(day, "day", &path)?;
            self.require_non_empty_string(day, "temp", &path)?;
            self.require_non_empty_string(day, "condition", &path)?;
            let icon = self.require_field(day, "icon", &path)?;
            self.validate_enum(icon, &WeatherIcon::NAMES, &format!("{}.icon", path))?;
        }

        let news = self.require_array(obj, "news", "root")?;
        self.require_non_empty_array(news, "news")?;
        for (i, item) in news.iter().enumerate() {
            let path = format!("news[{}]", i);
            let item = self.require_object(item, &path)?;
            self.require_non_empty_string(item, "title", &path)?;
            self.require_non_empty_string(item, "source", &path)?;
            self.require_url(item, "url", &path)?;
        }

        let places = self.require_array(obj, "touristPlaces", "root")?;
        self.require_non_empty_array(places, "touristPlaces")?;
        for (i, place) in places.iter().enumerate() {
            let path = format!("touristPlaces[{}]", i);
            let place = self.require_object(place, &path)?;
            self.require_non_empty_string(place, "name", &path)?;
            self.require_non_empty_string(place, "imageHint", &path)?;
            self.require_non_empty_string(place, "description", &path)?;
        }

        Ok(())
    }

    fn validate_single_text(&self, output: &Value, field: &str) -> Result<(), SchemaValidationError> {
        let obj = self.require_object(output, "root")?;
        self.require_non_empty_string(obj, field, "root")?;
        Ok(())
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn field_path(parent: &str, field: &str) -> String {
        if parent == "root" {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }

    fn require_object<'a>(
        &self,
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Object, SchemaValidationError> {
        value.as_object().ok_or_else(|| SchemaValidationError::InvalidType {
            field: path.to_string(),
            expected: "object".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn require_field<'a>(
        &self,
        obj: &'a Object,
        field: &str,
        parent: &str,
    ) -> Result<&'a Value, SchemaValidationError> {
        obj.get(field)
            .ok_or_else(|| SchemaValidationError::MissingRequired {
                field: Self::field_path(parent, field),
            })
    }

    fn require_array<'a>(
        &self,
        obj: &'a Object,
        field: &str,
        parent: &str,
    ) -> Result<&'a Vec<Value>, SchemaValidationError> {
        let value = self.require_field(obj, field, parent)?;
        value.as_array().ok_or_else(|| SchemaValidationError::InvalidType {
            field: Self::field_path(parent, field),
            expected: "array".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn require_len(
        &self,
        items: &[Value],
        path: &str,
        (min, max): (usize, usize),
    ) -> Result<(), SchemaValidationError> {
        if (min..=max).contains(&items.len()) {
            Ok(())
        } else {
            Err(SchemaValidationError::InvalidLength {
                field: path.to_string(),
                min,
                max,
                actual: items.len(),
            })
        }
    }

    fn require_non_empty_array(&self, items: &[Value], path: &str) -> Result<(), SchemaValidationError> {
        if items.is_empty() {
            Err(SchemaValidationError::ArrayTooShort {
                field: path.to_string(),
                min: 1,
                actual: 0,
            })
        } else {
            Ok(())
        }
    }

    fn require_string_field<'a>(
        &self,
        obj: &'a Object,
        field: &str,
        parent: &str,
    ) -> Result<&'a str, SchemaValidationError> {
        let value = self.require_field(obj, field, parent)?;
        value.as_str().ok_or_else(|| SchemaValidationError::InvalidType {
            field: Self::field_path(parent, field),
            expected: "string".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn require_non_empty_string<'a>(
        &self,
        obj: &'a Object,
        field: &str,
        parent: &str,
    ) -> Result<&'a str, SchemaValidationError> {
        let value = self.require_string_field(obj, field, parent)?;
        if value.trim().is_empty() {
            return Err(SchemaValidationError::Generic {
                message: format!("{} must not be empty", Self::field_path(parent, field)),
            });
        }
        Ok(value)
    }

    fn require_price(
        &self,
        obj: &Object,
        field: &str,
        parent: &str,
    ) -> Result<(), SchemaValidationError> {
        let value = self.require_string_field(obj, field, parent)?;
        check_price(value).map_err(|reason| SchemaValidationError::InvalidFormat {
            field: Self::field_path(parent, field),
            format: format!("rupee price ({})", reason),
        })
    }

    fn require_url(
        &self,
        obj: &Object,
        field: &str,
        parent: &str,
    ) -> Result<(), SchemaValidationError> {
        let value = self.require_string_field(obj, field, parent)?;
        check_web_link(value).map_err(|_| SchemaValidationError::InvalidFormat {
            field: Self::field_path(parent, field),
            format: "http(s) URL".to_string(),
        })
    }

    fn require_rating(
        &self,
        obj: &Object,
        field: &str,
        parent: &str,
    ) -> Result<(), SchemaValidationError> {
        let value = self.require_field(obj, field, parent)?;
        let rating = value.as_f64().ok_or_else(|| SchemaValidationError::InvalidType {
            field: Self::field_path(parent, field),
            expected: "number".to_string(),
            actual: Self::type_name(value),
        })?;
        if StarRating::new(rating).is_err() {
            return Err(SchemaValidationError::OutOfRange {
                field: Self::field_path(parent, field),
                value: rating.to_string(),
                min: StarRating::MIN.to_string(),
                max: StarRating::MAX.to_string(),
            });
        }
        Ok(())
    }

    fn validate_enum(
        &self,
        value: &Value,
        valid_values: &[&str],
        path: &str,
    ) -> Result<(), SchemaValidationError> {
        match value.as_str() {
            Some(s) if valid_values.contains(&s) => Ok(()),
            Some(s) => Err(SchemaValidationError::Generic {
                message: format!("{} must be one of: {:?}, got '{}'", path, valid_values, s),
            }),
            None => Err(SchemaValidationError::InvalidType {
                field: path.to_string(),
                expected: "string".to_string(),
                actual: Self::type_name(value),
            }),
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }

    fn collect_errors(mut errors: Vec<SchemaValidationError>) -> Result<(), SchemaValidationError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SchemaValidationError::Multiple(errors)),
        }
    }
}

fn parse_schema(name: &str, raw: &str) -> Value {
    serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("Embedded schema {} is not valid JSON: {}", name, e))
}

static FLIGHTS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema("flights", include_str!("../../domain/flows/schemas/flights.json"))
});
static TRAINS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema("trains", include_str!("../../domain/flows/schemas/trains.json"))
});
static BUSES_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema("buses", include_str!("../../domain/flows/schemas/buses.json"))
});
static ACCOMMODATIONS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema(
        "accommodations",
        include_str!("../../domain/flows/schemas/accommodations.json"),
    )
});
static LOCATION_DETAILS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema(
        "location_details",
        include_str!("../../domain/flows/schemas/location_details.json"),
    )
});
static CHAT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema("chat", include_str!("../../domain/flows/schemas/chat.json"))
});
static REVERSE_GEOCODE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema(
        "reverse_geocode",
        include_str!("../../domain/flows/schemas/reverse_geocode.json"),
    )
});
static ITINERARY_SCHEMA: Lazy<Value> = Lazy::new(|| {
    parse_schema(
        "itinerary",
        include_str!("../../domain/flows/schemas/itinerary.json"),
    )
});

impl FlowSchemaValidator for JsonSchemaValidator {
    fn validate(&self, kind: FlowKind, output: &Value) -> Result<(), SchemaValidationError> {
        self.validate_flow(kind, output)
    }

    fn schema_for(&self, kind: FlowKind) -> &Value {
        match kind {
            FlowKind::Flights => &*FLIGHTS_SCHEMA,
            FlowKind::Trains => &*TRAINS_SCHEMA,
            FlowKind::Buses => &*BUSES_SCHEMA,
            FlowKind::Accommodations => &*ACCOMMODATIONS_SCHEMA,
            FlowKind::LocationDetails => &*LOCATION_DETAILS_SCHEMA,
            FlowKind::Chat => &*CHAT_SCHEMA,
            FlowKind::ReverseGeocode => &*REVERSE_GEOCODE_SCHEMA,
            FlowKind::Itinerary => &*ITINERARY_SCHEMA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> JsonSchemaValidator {
        JsonSchemaValidator::new()
    }

    fn flight(price: &str, url: &str) -> Value {
        json!({
            "airline": "IndiGo",
            "flightNumber": "6E 2134",
            "departure": "06:10",
            "arrival": "08:25",
            "duration": "2h 15m",
            "platform": "MakeMyTrip",
            "price": price,
            "url": url
        })
    }

    fn flights(count: usize) -> Value {
        let results: Vec<_> = (0..count)
            .map(|_| flight("₹5,499", "https://www.makemytrip.com/flights"))
            .collect();
        json!({ "results": results })
    }

    fn hotel(rating: f64) -> Value {
        json!({
            "name": "The Leela Palace",
            "rating": rating,
            "imageUrl": "https://source.unsplash.com/800x600/?luxury-hotel-delhi",
            "imageHint": "luxury hotel",
            "platforms": [
                { "platform": "Booking.com", "price": "₹18,500", "url": "https://www.booking.com" },
                { "platform": "Agoda", "price": "₹17,900", "url": "https://www.agoda.com" }
            ]
        })
    }

    fn location_details() -> Value {
        json!({
            "name": "Jaipur, Rajasthan",
            "description": "The Pink City, famed for its palaces and forts.",
            "heroImageHint": "jaipur palace",
            "accommodations": [
                { "name": "Rambagh Palace", "price": "₹45,000", "platform": "Taj Hotels", "rating": 4.9 }
            ],
            "weather": [
                { "day": "Today", "temp": "34°C", "condition": "Sunny", "icon": "Sun" },
                { "day": "Tomorrow", "temp": "33°C", "condition": "Cloudy", "icon": "Cloud" },
                { "day": "Friday", "temp": "29°C", "condition": "Showers", "icon": "CloudRain" }
            ],
            "news": [
                { "title": "Jaipur Literature Festival dates announced", "source": "The Hindu", "url": "https://www.thehindu.com/news" }
            ],
            "touristPlaces": [
                { "name": "Amber Fort", "imageHint": "hill fort", "description": "Hilltop fort of red sandstone." }
            ]
        })
    }

    // =============================================================
    // Route comparison
    // =============================================================

    #[test]
    fn flights_valid_with_five_results() {
        assert!(validator().validate(FlowKind::Flights, &flights(5)).is_ok());
    }

    #[test]
    fn flights_require_at_least_five_results() {
        let err = validator()
            .validate(FlowKind::Flights, &flights(4))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::InvalidLength { min: 5, max: 10, actual: 4, .. }
        ));
    }

    #[test]
    fn flights_reject_more_than_ten_results() {
        let err = validator()
            .validate(FlowKind::Flights, &flights(11))
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidLength { actual: 11, .. }));
    }

    #[test]
    fn price_without_rupee_glyph_is_rejected() {
        let mut payload = flights(5);
        payload["results"][2] = flight("$65", "https://www.goibibo.com");
        let err = validator().validate(FlowKind::Flights, &payload).unwrap_err();
        match err {
            SchemaValidationError::InvalidFormat { field, .. } => {
                assert_eq!(field, "results[2].price")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn price_with_leading_whitespace_is_rejected() {
        let mut payload = flights(5);
        payload["results"][1] = flight("  ₹5,499", "https://www.makemytrip.com/flights");
        let err = validator().validate(FlowKind::Flights, &payload).unwrap_err();
        assert!(err.to_string().contains("results[1].price"));
    }

    #[test]
    fn relative_url_is_rejected() {
        let mut payload = flights(5);
        payload["results"][0] = flight("₹4,999", "/flights/del-bom");
        let err = validator().validate(FlowKind::Flights, &payload).unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn every_bad_item_is_reported() {
        let mut payload = flights(5);
        payload["results"][0] = flight("4999", "https://a.example");
        payload["results"][4] = flight("₹4,999", "ftp://b.example");
        let err = validator().validate(FlowKind::Flights, &payload).unwrap_err();
        assert_eq!(err.error_count(), 2);
    }

    #[test]
    fn trains_use_their_own_field_names() {
        let results: Vec<_> = (0..5)
            .map(|_| {
                json!({
                    "trainName": "Rajdhani Express",
                    "trainNumber": "12951",
                    "departure": "17:00",
                    "arrival": "08:32",
                    "duration": "15h 32m",
                    "platform": "IRCTC Official",
                    "price": "₹3,500",
                    "url": "https://www.irctc.co.in"
                })
            })
            .collect();
        let payload = json!({ "results": results });

        assert!(validator().validate(FlowKind::Trains, &payload).is_ok());
        let err = validator().validate(FlowKind::Buses, &payload).unwrap_err();
        assert!(err.to_string().contains("operator"));
    }

    // =============================================================
    // Accommodations
    // =============================================================

    #[test]
    fn single_hotel_result_is_allowed() {
        let payload = json!({ "results": [hotel(4.7)] });
        assert!(validator()
            .validate(FlowKind::Accommodations, &payload)
            .is_ok());
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        let payload = json!({ "results": [hotel(5.5)] });
        let err = validator()
            .validate(FlowKind::Accommodations, &payload)
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::OutOfRange { .. }));
    }

    #[test]
    fn hotel_needs_a_platform_price() {
        let mut h = hotel(4.0);
        h["platforms"] = json!([]);
        let err = validator()
            .validate(FlowKind::Accommodations, &json!({ "results": [h] }))
            .unwrap_err();
        assert_eq!(
            err.to_client_message(),
            "Field 'results[0].platforms' requires at least 1 items"
        );
    }

    #[test]
    fn empty_hotel_list_is_rejected() {
        let err = validator()
            .validate(FlowKind::Accommodations, &json!({ "results": [] }))
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidLength { actual: 0, .. }));
    }

    // =============================================================
    // Location details
    // =============================================================

    #[test]
    fn location_details_valid_complete() {
        assert!(validator()
            .validate(FlowKind::LocationDetails, &location_details())
            .is_ok());
    }

    #[test]
    fn location_details_reports_all_missing_sections() {
        let err = validator()
            .validate(FlowKind::LocationDetails, &json!({ "name": "Agra" }))
            .unwrap_err();
        assert!(err.is_multiple());
        assert_eq!(err.error_count(), 6);
    }

    #[test]
    fn forecast_must_cover_three_days() {
        let mut payload = location_details();
        payload["weather"].as_array_mut().unwrap().pop();
        let err = validator()
            .validate(FlowKind::LocationDetails, &payload)
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::InvalidLength { min: 3, max: 3, actual: 2, .. }
        ));
    }

    #[test]
    fn unknown_weather_icon_is_rejected() {
        let mut payload = location_details();
        payload["weather"][1]["icon"] = json!("Snowflake");
        let err = validator()
            .validate(FlowKind::LocationDetails, &payload)
            .unwrap_err();
        assert!(err.to_string().contains("weather[1].icon"));
    }

    #[test]
    fn news_link_must_be_absolute() {
        let mut payload = location_details();
        payload["news"][0]["url"] = json!("thehindu.com/news");
        assert!(validator()
            .validate(FlowKind::LocationDetails, &payload)
            .is_err());
    }

    // =============================================================
    // Single-text flows
    // =============================================================

    #[test]
    fn chat_reply_must_not_be_blank() {
        let v = validator();
        assert!(v
            .validate(FlowKind::Chat, &json!({ "translatedResponse": "नमस्ते!" }))
            .is_ok());
        assert!(v
            .validate(FlowKind::Chat, &json!({ "translatedResponse": "  " }))
            .is_err());
    }

    #[test]
    fn single_text_flows_accept_their_field() {
        let v = validator();
        assert!(v
            .validate(FlowKind::ReverseGeocode, &json!({ "placeName": "Kochi, Kerala" }))
            .is_ok());
        assert!(v
            .validate(FlowKind::Itinerary, &json!({ "itinerary": "## Day 1\nFort Kochi walk" }))
            .is_ok());
        assert!(v
            .validate(FlowKind::Itinerary, &json!({ "itinerary": "" }))
            .is_err());
    }

    #[test]
    fn place_name_must_be_a_string() {
        let err = validator()
            .validate(FlowKind::ReverseGeocode, &json!({ "placeName": 42 }))
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidType { .. }));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = validator()
            .validate(FlowKind::Itinerary, &json!(["Day 1"]))
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidType { .. }));
    }

    // =============================================================
    // Schema access
    // =============================================================

    #[test]
    fn schema_for_returns_valid_json() {
        let v = validator();
        for kind in FlowKind::all() {
            let schema = v.schema_for(*kind);
            assert_eq!(schema["type"], "object", "schema for {kind}");
            assert!(schema["required"].as_array().is_some_and(|r| !r.is_empty()));
        }
    }

    #[test]
    fn comparison_schemas_declare_result_bounds() {
        let v = validator();
        for kind in FlowKind::all().iter().filter(|k| k.is_comparison()) {
            let results = &v.schema_for(*kind)["properties"]["results"];
            let bounds = result_count_bounds(*kind);
            assert_eq!(results["minItems"], *bounds.start());
            assert_eq!(results["maxItems"], *bounds.end());
        }
    }
}
