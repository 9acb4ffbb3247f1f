//! Trip telemetry configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the anonymized trip upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Prefix of generated upload reference ids (`<prefix>-<millis>`)
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
}

impl TelemetryConfig {
    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let prefix = self.reference_prefix.as_str();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidReferencePrefix);
        }
        Ok(())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            reference_prefix: default_reference_prefix(),
        }
    }
}

fn default_reference_prefix() -> String {
    "NATPAC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix_is_valid() {
        let config = TelemetryConfig::default();
        assert_eq!(config.reference_prefix, "NATPAC");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefix_with_separator_is_rejected() {
        let config = TelemetryConfig {
            reference_prefix: "NAT-PAC".to_string(),
        };
        assert!(config.validate().is_err());

        let config = TelemetryConfig {
            reference_prefix: String::new(),
        };
        assert!(config.validate().is_err());
    }
}
