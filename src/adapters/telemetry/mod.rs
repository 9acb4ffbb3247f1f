//! Telemetry Adapters - Trip upload implementations.

mod simulated_uploader;

pub use simulated_uploader::SimulatedTripUploader;
