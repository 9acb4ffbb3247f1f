//! Integration tests for live trip tracking.
//!
//! Covers the path from session consent through a tracked trip to the
//! telemetry upload:
//! 1. Consent gates tracking
//! 2. A stopped track yields one record and releases its watch
//! 3. The labelled record uploads with the configured reference prefix

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use questify::adapters::ai::{MockAIProvider, MockError};
use questify::adapters::session_store::InMemorySessionStore;
use questify::adapters::telemetry::SimulatedTripUploader;
use questify::adapters::tracking::ChannelPositionSource;
use questify::adapters::validation::JsonSchemaValidator;
use questify::application::handlers::flows::FlowRunner;
use questify::application::handlers::session::{
    LoadSessionHandler, RecordConsentCommand, RecordConsentHandler,
};
use questify::application::handlers::trips::{
    TripRecorder, TripTracker, UploadTripCommand, UploadTripHandler,
};
use questify::domain::foundation::Coordinates;
use questify::domain::tracking::{PositionSample, TrackingError};
use questify::domain::trip::{TransportMode, TripUpload, UploadReceipt};
use questify::ports::{TripUploader, UploadError};

/// Delegates to the simulated uploader and keeps what it was given.
struct RecordingUploader {
    inner: SimulatedTripUploader,
    received: Mutex<Vec<TripUpload>>,
}

impl RecordingUploader {
    fn wrapping(inner: SimulatedTripUploader) -> Self {
        Self {
            inner,
            received: Mutex::new(Vec::new()),
        }
    }

    fn received(&self) -> Vec<TripUpload> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl TripUploader for RecordingUploader {
    async fn upload(&self, trip: &TripUpload) -> Result<UploadReceipt, UploadError> {
        self.received.lock().unwrap().push(trip.clone());
        self.inner.upload(trip).await
    }
}

fn sample(lat: f64, lon: f64) -> PositionSample {
    PositionSample::now(Coordinates::new(lat, lon).unwrap())
}

#[tokio::test]
async fn tracking_requires_recorded_consent() {
    let store = Arc::new(InMemorySessionStore::new());
    let source = ChannelPositionSource::new();
    let tracker = TripTracker::new(Arc::new(source.clone()));

    let session = LoadSessionHandler::new(store.clone()).handle().await.unwrap();
    let refused = tracker.start(&session, TransportMode::Bus);
    assert!(matches!(refused, Err(TrackingError::ConsentRequired)));
    assert_eq!(source.active_watches(), 0);

    let session = RecordConsentHandler::new(store)
        .handle(RecordConsentCommand { consent: true })
        .await
        .unwrap();
    let track = tracker.start(&session, TransportMode::Bus).unwrap();
    assert_eq!(source.active_watches(), 1);

    drop(track);
    assert_eq!(source.active_watches(), 0);
}

#[tokio::test]
async fn tracked_trip_is_labelled_and_uploaded() {
    let store = Arc::new(InMemorySessionStore::new());
    let session = RecordConsentHandler::new(store)
        .handle(RecordConsentCommand { consent: true })
        .await
        .unwrap();

    let source = ChannelPositionSource::new();
    let tracker = TripTracker::new(Arc::new(source.clone()));
    let track = tracker.start(&session, TransportMode::Train).unwrap();

    source.publish(sample(8.4875, 76.9525));
    source.publish(sample(8.7379, 76.7163));
    source.publish(sample(8.8932, 76.6141));

    let record = track.stop().unwrap();
    assert_eq!(source.active_watches(), 0);
    assert_eq!(record.path.len(), 3);

    let provider = MockAIProvider::new()
        .with_json_response(&json!({ "placeName": "Thiruvananthapuram Central" }))
        .with_error(MockError::Timeout { timeout_secs: 30 });
    let runner = FlowRunner::new(
        Arc::new(provider.clone()),
        Arc::new(JsonSchemaValidator::new()),
    );
    let recorder = TripRecorder::new(Arc::new(runner));

    let record = recorder.label(record).await;
    assert_eq!(record.origin, "Thiruvananthapuram Central");
    assert_eq!(record.destination, "8.8932, 76.6141");

    let uploader = Arc::new(RecordingUploader::wrapping(SimulatedTripUploader::new("NATPAC")));
    let receipt = UploadTripHandler::new(uploader.clone())
        .handle(UploadTripCommand {
            trip: recorder.upload_for(&record, &session),
        })
        .await
        .unwrap();

    assert!(receipt.success);
    assert!(receipt.reference_id.unwrap().starts_with("NATPAC-"));

    let submitted = uploader.received();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].user_id, session.anonymous_id.to_string());
    assert_eq!(submitted[0].mode, TransportMode::Train);
    assert_eq!(submitted[0].path_len(), 3);
}

#[tokio::test]
async fn stopping_without_movement_fails_and_still_releases() {
    let store = Arc::new(InMemorySessionStore::new());
    let session = RecordConsentHandler::new(store)
        .handle(RecordConsentCommand { consent: true })
        .await
        .unwrap();
    let source = ChannelPositionSource::new();
    let track = TripTracker::new(Arc::new(source.clone()))
        .start(&session, TransportMode::Walk)
        .unwrap();

    let err = track.stop().unwrap_err();

    assert!(matches!(err, TrackingError::NotEnoughSamples { recorded: 0, .. }));
    assert_eq!(source.active_watches(), 0);
}
