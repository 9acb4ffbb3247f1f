//! Session context handlers.

mod load_session;
mod record_consent;

pub use load_session::LoadSessionHandler;
pub use record_consent::{RecordConsentCommand, RecordConsentHandler};
