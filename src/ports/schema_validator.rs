//! Schema Validator Port - Flow output validation interface.
//!
//! The domain depends on this trait, while the JSON Schema adapter provides
//! the implementation. Each flow's raw model payload passes through here
//! before it is deserialized into the typed output.

use serde_json::Value;
use thiserror::Error;

use crate::domain::flows::FlowKind;

/// Port for validating flow outputs against their schemas.
///
/// # Contract
///
/// Implementations must:
/// - Hold a JSON Schema for every [`FlowKind`]
/// - Enforce required fields, list lengths, price glyphs, rating range,
///   URL well-formedness and enum values
/// - Provide schema access for introspection
pub trait FlowSchemaValidator: Send + Sync {
    /// Validate a payload against the flow's output schema.
    fn validate(&self, kind: FlowKind, output: &Value) -> Result<(), SchemaValidationError>;

    /// Get the JSON Schema for a flow.
    ///
    /// Schemas are public and safe to expose via API.
    fn schema_for(&self, kind: FlowKind) -> &Value;
}

/// Errors that can occur during schema validation.
///
/// These carry detail for logs. Clients only ever see the generic flow
/// failure message; `to_client_message()` exists for diagnostics endpoints.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Array too short for field {field}: minimum {min}, got {actual}")]
    ArrayTooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Array length for field {field} must be in [{min}, {max}], got {actual}")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Value out of range for field {field}: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Invalid format for field {field}: expected {format}")]
    InvalidFormat { field: String, format: String },

    #[error("Schema validation failed: {message}")]
    Generic { message: String },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    pub fn generic(message: impl Into<String>) -> Self {
        SchemaValidationError::Generic {
            message: message.into(),
        }
    }

    /// Client-safe rendering without the offending values.
    pub fn to_client_message(&self) -> String {
        match self {
            SchemaValidationError::MissingRequired { field } => {
                format!("Missing required field: {}", field)
            }
            SchemaValidationError::InvalidType { field, expected, .. } => {
                format!("Invalid type for field '{}': expected {}", field, expected)
            }
            SchemaValidationError::ArrayTooShort { field, min, .. } => {
                format!("Field '{}' requires at least {} items", field, min)
            }
            SchemaValidationError::InvalidLength { field, min, max, .. } => {
                format!("Field '{}' requires between {} and {} items", field, min, max)
            }
            SchemaValidationError::OutOfRange { field, min, max, .. } => {
                format!("Field '{}' must be between {} and {}", field, min, max)
            }
            SchemaValidationError::InvalidFormat { field, format } => {
                format!("Field '{}' must be a valid {}", field, format)
            }
            SchemaValidationError::Generic { message } => {
                if message.chars().count() > 100 {
                    let head: String = message.chars().take(97).collect();
                    format!("Validation failed: {}...", head)
                } else {
                    format!("Validation failed: {}", message)
                }
            }
            SchemaValidationError::Multiple(errors) => errors
                .first()
                .map(|e| e.to_client_message())
                .unwrap_or_else(|| "Validation failed".to_string()),
        }
    }

    /// Returns true if this error contains multiple validation failures.
    pub fn is_multiple(&self) -> bool {
        matches!(self, SchemaValidationError::Multiple(_))
    }

    /// Count of individual validation failures.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

impl PartialEq for SchemaValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
