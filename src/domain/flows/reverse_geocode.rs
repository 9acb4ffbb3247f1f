//! Reverse geocoding flow: coordinates to a readable place name.

use serde::{Deserialize, Serialize};

use super::{Flow, FlowKind};
use crate::domain::foundation::{Coordinates, ValidationError};

/// Coordinates to resolve. Serializes as `{"latitude": .., "longitude": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeocodeQuery(pub Coordinates);

impl GeocodeQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self(Coordinates {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceName {
    /// e.g. `Connaught Place, New Delhi`
    pub place_name: String,
}

pub struct ReverseGeocode;

impl Flow for ReverseGeocode {
    const KIND: FlowKind = FlowKind::ReverseGeocode;
    type Input = GeocodeQuery;
    type Output = PlaceName;

    fn validate_input(input: &GeocodeQuery) -> Result<(), ValidationError> {
        input.0.validate()
    }

    fn finalize(_input: &GeocodeQuery, output: PlaceName) -> PlaceName {
        PlaceName {
            place_name: output.place_name.trim().to_string(),
        }
    }
}
