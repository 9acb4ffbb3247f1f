//! Trip Uploader Port - Anonymized trip telemetry submission.
//!
//! The research endpoint behind this port is external. The shipped adapter
//! only simulates acceptance; a real one would authenticate and POST.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::trip::{TripUpload, UploadReceipt};

/// Port for submitting trip telemetry.
#[async_trait]
pub trait TripUploader: Send + Sync {
    /// Submits one already-validated trip.
    async fn upload(&self, trip: &TripUpload) -> Result<UploadReceipt, UploadError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("telemetry endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("telemetry endpoint rejected the upload: {0}")]
    Rejected(String),
}

impl UploadError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        UploadError::Unavailable(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        UploadError::Rejected(message.into())
    }
}
