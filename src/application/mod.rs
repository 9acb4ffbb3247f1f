//! Application layer - Flow execution and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Flows
    FlowError, FlowRunner, GenerationSettings,
    // Session
    LoadSessionHandler, RecordConsentCommand, RecordConsentHandler,
    // Trips
    ActiveTrack, TripRecorder, TripTracker, UploadTripCommand, UploadTripError,
    UploadTripHandler,
};
