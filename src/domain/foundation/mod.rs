//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Questify domain.

mod web_link;
mod coordinates;
mod errors;
mod ids;
mod price;
mod rating;
mod timestamp;

pub use web_link::{check_web_link, WebLink};
pub use coordinates::Coordinates;
pub use errors::{require_text, ErrorCode, ValidationError};
pub use ids::{AnonymousId, TripId, WatchId};
pub use price::{check_price, Price, RUPEE_GLYPH};
pub use rating::StarRating;
pub use timestamp::Timestamp;
