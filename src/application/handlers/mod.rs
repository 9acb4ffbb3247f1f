//! Application handlers.
//!
//! Services and command handlers that orchestrate domain operations
//! through the ports.

pub mod flows;
pub mod session;
pub mod trips;

pub use flows::{FlowError, FlowRunner, GenerationSettings};
pub use session::{LoadSessionHandler, RecordConsentCommand, RecordConsentHandler};
pub use trips::{
    ActiveTrack, TripRecorder, TripTracker, UploadTripCommand, UploadTripError, UploadTripHandler,
};
