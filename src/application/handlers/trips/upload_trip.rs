//! UploadTripHandler - Submits an anonymized trip to the telemetry endpoint.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::trip::{TripUpload, UploadReceipt};
use crate::ports::{TripUploader, UploadError};

/// Command to upload one trip.
#[derive(Debug, Clone)]
pub struct UploadTripCommand {
    pub trip: TripUpload,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadTripError {
    #[error("invalid trip: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl UploadTripError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UploadTripError::Validation(err) => err.code(),
            UploadTripError::Upload(_) => ErrorCode::UploadFailed,
        }
    }
}

/// Handler for trip uploads.
pub struct UploadTripHandler {
    uploader: Arc<dyn TripUploader>,
}

impl UploadTripHandler {
    pub fn new(uploader: Arc<dyn TripUploader>) -> Self {
        Self { uploader }
    }

    pub async fn handle(&self, cmd: UploadTripCommand) -> Result<UploadReceipt, UploadTripError> {
        // Checked locally so a malformed trip never leaves the process
        cmd.trip.validate()?;

        debug!(
            mode = %cmd.trip.mode,
            path_points = cmd.trip.path_len(),
            "Uploading trip"
        );

        self.uploader.upload(&cmd.trip).await.map_err(|e| {
            error!(error = %e, "Trip upload failed");
            UploadTripError::from(e)
        })
    }
}
