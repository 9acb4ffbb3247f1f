//! Simulated trip uploader.
//!
//! Stands in for the research telemetry endpoint: logs the submission and
//! acknowledges it with a `<prefix>-<unix millis>` reference id. Nothing
//! leaves the process and nothing is kept after the call returns.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::Timestamp;
use crate::domain::trip::{TripUpload, UploadReceipt};
use crate::ports::{TripUploader, UploadError};

#[derive(Debug, Clone)]
pub struct SimulatedTripUploader {
    reference_prefix: String,
}

impl SimulatedTripUploader {
    pub fn new(reference_prefix: impl Into<String>) -> Self {
        Self {
            reference_prefix: reference_prefix.into(),
        }
    }

    fn reference_id(&self, at: Timestamp) -> String {
        format!("{}-{}", self.reference_prefix, at.unix_millis())
    }
}

#[async_trait]
impl TripUploader for SimulatedTripUploader {
    async fn upload(&self, trip: &TripUpload) -> Result<UploadReceipt, UploadError> {
        let reference_id = self.reference_id(Timestamp::now());

        info!(
            reference_id = %reference_id,
            user_id = %trip.user_id,
            origin = %trip.origin,
            destination = %trip.destination,
            mode = %trip.mode,
            path_points = trip.path_len(),
            "Received trip data for upload"
        );

        Ok(UploadReceipt::accepted(reference_id))
    }
}
