//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `flows` - Schema-bound generation contracts, one per travel vertical
//! - `trip` - Trip telemetry uploads and trip records
//! - `session` - Consent flag and anonymous id context
//! - `tracking` - Accumulation of position samples into trips

pub mod flows;
pub mod foundation;
pub mod session;
pub mod tracking;
pub mod trip;
