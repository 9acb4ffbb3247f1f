//! Display price in Indian Rupees, e.g. `₹5,500`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Currency glyph every generated price must start with.
pub const RUPEE_GLYPH: char = '₹';

/// A price string as shown to travellers.
///
/// Prices are display strings, not amounts: the only guarantee is the
/// leading rupee glyph followed by at least one digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(String);

impl Price {
    /// Parses a price string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_price(&value).map_err(|reason| ValidationError::invalid_format("price", reason))?;
        Ok(Self(value))
    }

    /// Returns the price as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks the rupee format, returning the reason on failure.
///
/// The glyph must be the first character; surrounding whitespace is not
/// stripped.
pub fn check_price(value: &str) -> Result<(), &'static str> {
    let Some(rest) = value.strip_prefix(RUPEE_GLYPH) else {
        return Err("price must start with ₹");
    };
    if !rest.chars().any(|c| c.is_ascii_digit()) {
        return Err("price must contain an amount");
    }
    Ok(())
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
