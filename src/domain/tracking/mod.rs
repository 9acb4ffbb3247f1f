//! Tracking domain module.
//!
//! Linear accumulation of position samples into a trip record. No
//! smoothing, clustering or outlier rejection is applied.

mod errors;
mod track;

pub use errors::TrackingError;
pub use track::{PositionSample, Track, MIN_SAMPLES};
