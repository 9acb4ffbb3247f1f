//! Trip record produced by a finished location track.

use serde::{Deserialize, Serialize};

use super::{PathPoint, TransportMode, TripUpload};
use crate::domain::foundation::{AnonymousId, Coordinates, Timestamp, TripId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: TripId,
    pub origin: String,
    pub destination: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub mode: TransportMode,
    pub travelers: Vec<AnonymousId>,
    pub path: Vec<PathPoint>,
}

impl TripRecord {
    /// Coordinates of the first recorded point.
    pub fn origin_coordinates(&self) -> Option<Coordinates> {
        self.path.first().map(PathPoint::coordinates)
    }

    /// Coordinates of the last recorded point.
    pub fn destination_coordinates(&self) -> Option<Coordinates> {
        self.path.last().map(PathPoint::coordinates)
    }

    /// Builds the telemetry upload for this trip on behalf of `user`.
    pub fn to_upload(&self, user: &AnonymousId) -> TripUpload {
        TripUpload {
            user_id: user.to_string(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            start_time: self.start_time.to_rfc3339(),
            end_time: self.end_time.to_rfc3339(),
            mode: self.mode,
            path: Some(self.path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_carries_path_and_rfc3339_times() {
        let start = Timestamp::now();
        let end = start.plus_seconds(600);
        let user = AnonymousId::generate();
        let record = TripRecord {
            id: TripId::new(),
            origin: "9.9312, 76.2673".to_string(),
            destination: "10.0889, 77.0595".to_string(),
            start_time: start,
            end_time: end,
            mode: TransportMode::Bus,
            travelers: vec![user.clone()],
            path: vec![
                PathPoint::new(Coordinates::new(9.9312, 76.2673).unwrap(), start),
                PathPoint::new(Coordinates::new(10.0889, 77.0595).unwrap(), end),
            ],
        };

        let upload = record.to_upload(&user);
        assert_eq!(upload.user_id, user.as_str());
        assert_eq!(upload.path_len(), 2);
        assert!(upload.validate().is_ok());
        assert_eq!(
            record.destination_coordinates().unwrap().latitude,
            10.0889
        );
    }
}
