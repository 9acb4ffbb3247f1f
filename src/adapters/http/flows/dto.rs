//! DTOs for flow endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::flows::{FlowKind, GeocodeQuery, SupportedLanguage};
use crate::domain::foundation::{Coordinates, ValidationError};

/// Reverse geocode request. Both axes are optional on the wire so a missing
/// one is reported as an empty field rather than a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReverseGeocodeRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReverseGeocodeRequest {
    pub fn into_query(self) -> Result<GeocodeQuery, ValidationError> {
        let latitude = self
            .latitude
            .ok_or_else(|| ValidationError::empty_field("latitude"))?;
        let longitude = self
            .longitude
            .ok_or_else(|| ValidationError::empty_field("longitude"))?;
        Ok(GeocodeQuery(Coordinates {
            latitude,
            longitude,
        }))
    }
}

/// Output schema of one flow.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSchemaResponse {
    pub flow: FlowKind,
    pub operation: &'static str,
    pub schema: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageListResponse {
    pub languages: &'static [SupportedLanguage],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_longitude_is_an_empty_field() {
        let req: ReverseGeocodeRequest = serde_json::from_str(r#"{"latitude": 12.97}"#).unwrap();
        let err = req.into_query().unwrap_err();
        assert_eq!(err.field(), "longitude");
    }

    #[test]
    fn both_axes_build_query() {
        let req: ReverseGeocodeRequest =
            serde_json::from_str(r#"{"latitude": 12.97, "longitude": 77.59}"#).unwrap();
        let query = req.into_query().unwrap();
        assert_eq!(query.0.longitude, 77.59);
    }
}
