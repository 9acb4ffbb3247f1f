//! Validation Adapters - Schema validation implementations.
//!
//! Contains the adapter validating flow outputs against their embedded
//! JSON Schemas.

mod json_schema_validator;

pub use json_schema_validator::JsonSchemaValidator;
