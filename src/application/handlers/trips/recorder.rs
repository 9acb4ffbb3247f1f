//! TripRecorder - Turns a finished track into a readable, uploadable trip.

use std::sync::Arc;

use tracing::warn;

use crate::application::handlers::flows::FlowRunner;
use crate::domain::flows::{GeocodeQuery, ReverseGeocode};
use crate::domain::foundation::Coordinates;
use crate::domain::session::SessionContext;
use crate::domain::trip::{TripRecord, TripUpload};

pub struct TripRecorder {
    runner: Arc<FlowRunner>,
}

impl TripRecorder {
    pub fn new(runner: Arc<FlowRunner>) -> Self {
        Self { runner }
    }

    /// Replaces coordinate labels with place names where geocoding succeeds.
    ///
    /// A failed lookup keeps the coordinate label for that endpoint.
    pub async fn label(&self, mut record: TripRecord) -> TripRecord {
        if let Some(origin) = record.origin_coordinates() {
            if let Some(name) = self.place_name(origin).await {
                record.origin = name;
            }
        }
        if let Some(destination) = record.destination_coordinates() {
            if let Some(name) = self.place_name(destination).await {
                record.destination = name;
            }
        }
        record
    }

    /// Telemetry upload for `record` on behalf of the session's traveler.
    pub fn upload_for(&self, record: &TripRecord, session: &SessionContext) -> TripUpload {
        record.to_upload(&session.anonymous_id)
    }

    async fn place_name(&self, coordinates: Coordinates) -> Option<String> {
        let query = GeocodeQuery(coordinates);
        match self.runner.run::<ReverseGeocode>(query).await {
            Ok(place) if !place.place_name.is_empty() => Some(place.place_name),
            Ok(_) => None,
            Err(err) => {
                warn!(
                    location = %coordinates.label(),
                    error = %err,
                    "Reverse geocoding failed, keeping coordinates"
                );
                None
            }
        }
    }
}
