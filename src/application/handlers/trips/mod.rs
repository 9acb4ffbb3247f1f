//! Trip telemetry and live tracking handlers.

mod recorder;
mod tracker;
mod upload_trip;

pub use recorder::TripRecorder;
pub use tracker::{ActiveTrack, TripTracker};
pub use upload_trip::{UploadTripCommand, UploadTripError, UploadTripHandler};
