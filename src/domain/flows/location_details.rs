//! Destination overview flow: description, stays, weather, news, sights.

use serde::{Deserialize, Serialize};

use super::{Flow, FlowKind};
use crate::domain::foundation::{require_text, Price, StarRating, ValidationError, WebLink};

/// Number of forecast days the overview must carry.
pub const FORECAST_DAYS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationQuery {
    /// Destination name, e.g. `Goa, India`.
    pub location: String,
}

impl LocationQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    pub name: String,
    pub description: String,
    pub hero_image_hint: String,
    pub accommodations: Vec<StaySummary>,
    pub weather: Vec<WeatherDay>,
    pub news: Vec<NewsItem>,
    pub tourist_places: Vec<TouristPlace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaySummary {
    pub name: String,
    /// Starting price per night.
    pub price: Price,
    pub platform: String,
    pub rating: StarRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDay {
    /// `Today`, `Tomorrow`, ...
    pub day: String,
    /// Temperature with unit, e.g. `31°C`.
    pub temp: String,
    pub condition: String,
    pub icon: WeatherIcon,
}

/// Icon set the front-end knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherIcon {
    Sun,
    Cloud,
    CloudRain,
}

impl WeatherIcon {
    /// Wire names of all icons.
    pub const NAMES: [&'static str; 3] = ["Sun", "Cloud", "CloudRain"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub url: WebLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristPlace {
    pub name: String,
    pub image_hint: String,
    pub description: String,
}

pub struct GenerateLocationDetails;

impl Flow for GenerateLocationDetails {
    const KIND: FlowKind = FlowKind::LocationDetails;
    type Input = LocationQuery;
    type Output = LocationDetails;

    fn validate_input(input: &LocationQuery) -> Result<(), ValidationError> {
        require_text("location", &input.location)
    }
}
