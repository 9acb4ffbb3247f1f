//! Session domain module.
//!
//! The per-device context that used to live in browser storage: the
//! tracking consent flag and the anonymous traveller id. It is loaded once
//! through the `SessionStore` port and passed explicitly afterwards.

mod context;

pub use context::{SessionContext, ANONYMOUS_ID_KEY, CONSENT_KEY};
