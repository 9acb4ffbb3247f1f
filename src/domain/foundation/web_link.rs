//! Well-formed absolute web link (booking pages, news articles, images).

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use super::ValidationError;

/// An absolute `http` or `https` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebLink(String);

impl WebLink {
    /// Parses and validates a link.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_web_link(&value).map_err(|reason| ValidationError::invalid_format("url", reason))?;
        Ok(Self(value))
    }

    /// Returns the link as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks that `value` is an absolute http(s) URL with a host.
pub fn check_web_link(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    match Url::parse(value) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(()),
            "http" | "https" => Err("URL has no host".to_string()),
            scheme => Err(format!("Unsupported URL scheme: {}", scheme)),
        },
        Err(e) => Err(format!("Invalid URL format: {}", e)),
    }
}

impl TryFrom<String> for WebLink {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<WebLink> for String {
    fn from(link: WebLink) -> Self {
        link.0
    }
}

impl fmt::Display for WebLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
