//! Trip domain module.
//!
//! Anonymized trip telemetry: the upload submitted to the research
//! endpoint and the record a location track produces.

mod record;
mod transport_mode;
mod upload;

pub use record::TripRecord;
pub use transport_mode::TransportMode;
pub use upload::{PathPoint, TripUpload, UploadReceipt};
