//! Geographic coordinate pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair after range checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let coords = Self {
            latitude,
            longitude,
        };
        coords.validate()?;
        Ok(coords)
    }

    /// Rejects non-finite values and values outside the globe.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_axis("latitude", self.latitude, 90.0)?;
        check_axis("longitude", self.longitude, 180.0)
    }

    /// Short `lat, lon` label used when no place name is known.
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

fn check_axis(field: &str, value: f64, limit: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, -limit, limit, value))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn label_uses_four_decimals() {
        let c = Coordinates::new(28.632_912, 77.219_34).unwrap();
        assert_eq!(c.label(), "28.6329, 77.2193");
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = Coordinates::new(91.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "latitude");
    }

    #[test]
    fn rejects_nan_longitude() {
        let err = Coordinates::new(0.0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), "longitude");
    }

    proptest! {
        #[test]
        fn every_point_on_the_globe_is_valid(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(Coordinates::new(lat, lon).is_ok());
        }

        #[test]
        fn latitudes_past_the_poles_are_rejected(lat in 90.0001f64..1000.0) {
            prop_assert!(Coordinates::new(lat, 0.0).is_err());
            prop_assert!(Coordinates::new(-lat, 0.0).is_err());
        }
    }
}
