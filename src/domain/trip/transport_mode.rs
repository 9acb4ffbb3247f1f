//! Mode of transport for a recorded trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
    Walk,
    Bicycle,
    Other,
}

impl TransportMode {
    /// All modes in wire order.
    pub fn all() -> &'static [TransportMode] {
        &[
            TransportMode::Flight,
            TransportMode::Train,
            TransportMode::Bus,
            TransportMode::Car,
            TransportMode::Walk,
            TransportMode::Bicycle,
            TransportMode::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
            TransportMode::Walk => "walk",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Other => "other",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(ValidationError::empty_field("mode"));
        }
        TransportMode::all()
            .iter()
            .copied()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ValidationError::unsupported("mode", wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for mode in TransportMode::all() {
            assert_eq!(mode.as_str().parse::<TransportMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn unknown_mode_is_unsupported() {
        let err = "rocket".parse::<TransportMode>().unwrap_err();
        assert_eq!(err, ValidationError::unsupported("mode", "rocket"));
        assert_eq!("".parse::<TransportMode>().unwrap_err().field(), "mode");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransportMode::Bicycle).unwrap(),
            "\"bicycle\""
        );
    }
}
