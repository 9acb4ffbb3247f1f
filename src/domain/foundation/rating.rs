//! Star rating value object (1 to 5, fractional allowed).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// User rating on a five-star scale, e.g. `4.3`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StarRating(f64);

impl StarRating {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 5.0;

    /// Creates a rating, rejecting values outside `[1, 5]` and non-finite input.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                Self::MIN,
                Self::MAX,
                value,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StarRating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for f64 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
