use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackingError {
    #[error("Location tracking requires consent")]
    ConsentRequired,

    #[error("A trip needs at least {required} position samples, got {recorded}")]
    NotEnoughSamples { required: usize, recorded: usize },

    #[error("Invalid position sample: {0}")]
    InvalidSample(#[from] ValidationError),

    #[error("Position source unavailable: {0}")]
    SourceUnavailable(String),
}

impl TrackingError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        TrackingError::SourceUnavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TrackingError::ConsentRequired => ErrorCode::ConsentRequired,
            TrackingError::NotEnoughSamples { .. } => ErrorCode::NotEnoughSamples,
            TrackingError::InvalidSample(err) => err.code(),
            TrackingError::SourceUnavailable(_) => ErrorCode::InternalError,
        }
    }
}
