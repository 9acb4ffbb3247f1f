//! Trip telemetry upload payload.

use serde::{Deserialize, Serialize};

use super::TransportMode;
use crate::domain::foundation::{require_text, Coordinates, Timestamp, ValidationError};

/// One timestamped point on the travelled path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: Timestamp,
}

impl PathPoint {
    pub fn new(coordinates: Coordinates, recorded_at: Timestamp) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            recorded_at,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Anonymized trip submitted to the research endpoint.
///
/// Times are kept as the RFC 3339 strings the client sent; [`validate`]
/// checks that they parse and are ordered.
///
/// [`validate`]: TripUpload::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpload {
    pub user_id: String,
    pub origin: String,
    pub destination: String,
    pub start_time: String,
    pub end_time: String,
    pub mode: TransportMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathPoint>>,
}

impl TripUpload {
    /// Checks required text, timestamp format and ordering, and path coordinates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("userId", &self.user_id)?;
        require_text("origin", &self.origin)?;
        require_text("destination", &self.destination)?;
        require_text("startTime", &self.start_time)?;
        require_text("endTime", &self.end_time)?;

        let start = Timestamp::parse_rfc3339("startTime", &self.start_time)?;
        let end = Timestamp::parse_rfc3339("endTime", &self.end_time)?;
        if end.is_before(&start) {
            return Err(ValidationError::invalid_format(
                "endTime",
                "end time precedes start time",
            ));
        }

        for point in self.path.iter().flatten() {
            point.coordinates().validate()?;
        }
        Ok(())
    }

    /// Number of path points attached, zero when no path was sent.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

/// Endpoint acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

impl UploadReceipt {
    pub fn accepted(reference_id: impl Into<String>) -> Self {
        Self {
            success: true,
            reference_id: Some(reference_id.into()),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            reference_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> TripUpload {
        TripUpload {
            user_id: "anon_7f1c".to_string(),
            origin: "Kochi".to_string(),
            destination: "Munnar".to_string(),
            start_time: "2024-05-01T06:00:00Z".to_string(),
            end_time: "2024-05-01T10:30:00Z".to_string(),
            mode: TransportMode::Car,
            path: None,
        }
    }

    #[test]
    fn valid_upload_passes() {
        assert!(upload().validate().is_ok());
    }

    #[test]
    fn malformed_start_time_names_field() {
        let mut trip = upload();
        trip.start_time = "yesterday morning".to_string();
        assert_eq!(trip.validate().unwrap_err().field(), "startTime");
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut trip = upload();
        trip.end_time = "2024-05-01T05:00:00Z".to_string();
        assert_eq!(trip.validate().unwrap_err().field(), "endTime");
    }

    #[test]
    fn blank_user_is_rejected() {
        let mut trip = upload();
        trip.user_id = " ".to_string();
        assert_eq!(
            trip.validate().unwrap_err(),
            ValidationError::empty_field("userId")
        );
    }

    #[test]
    fn path_points_are_range_checked() {
        let mut trip = upload();
        trip.path = Some(vec![PathPoint {
            latitude: 95.0,
            longitude: 76.0,
            recorded_at: Timestamp::now(),
        }]);
        assert_eq!(trip.validate().unwrap_err().field(), "latitude");
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(upload()).unwrap();
        assert_eq!(json["userId"], "anon_7f1c");
        assert_eq!(json["mode"], "car");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn receipt_omits_missing_reference() {
        let json = serde_json::to_value(UploadReceipt::rejected()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false }));
    }
}
