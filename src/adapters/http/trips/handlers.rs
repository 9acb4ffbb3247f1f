//! HTTP handlers for trip telemetry endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::trips::{UploadTripCommand, UploadTripError, UploadTripHandler};
use crate::domain::foundation::ErrorCode;
use crate::domain::trip::TripUpload;

/// Shown when the telemetry endpoint fails.
const UPLOAD_FAILURE_MESSAGE: &str = "Failed to upload trip data. Please try again.";

#[derive(Clone)]
pub struct TripHandlers {
    upload_handler: Arc<UploadTripHandler>,
}

impl TripHandlers {
    pub fn new(upload_handler: Arc<UploadTripHandler>) -> Self {
        Self { upload_handler }
    }
}

/// POST /api/trips/upload - Submit an anonymized trip
pub async fn upload_trip(
    State(handlers): State<TripHandlers>,
    payload: Result<Json<TripUpload>, JsonRejection>,
) -> Response {
    let Json(trip) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return ErrorResponse::bad_request(rejection.body_text())
                .with_status(StatusCode::BAD_REQUEST)
        }
    };

    match handlers
        .upload_handler
        .handle(UploadTripCommand { trip })
        .await
    {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(e) => handle_upload_error(e),
    }
}

fn handle_upload_error(error: UploadTripError) -> Response {
    match error {
        UploadTripError::Validation(err) => {
            ErrorResponse::validation(&err).with_status(StatusCode::BAD_REQUEST)
        }
        UploadTripError::Upload(_) => ErrorResponse::new(ErrorCode::UploadFailed, UPLOAD_FAILURE_MESSAGE)
            .with_status(StatusCode::BAD_GATEWAY),
    }
}
