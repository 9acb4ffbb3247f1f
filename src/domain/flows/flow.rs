//! The generic flow contract shared by every travel vertical.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::prompt::{render_input, PromptError};
use super::templates::template_for;
use super::FlowKind;
use crate::domain::foundation::ValidationError;

/// A named, schema-typed request/response operation backed by a prompt.
///
/// Implementors are zero-sized markers; the runner is generic over them,
/// so adding a vertical means declaring its shapes and validation only.
///
/// # Contract
///
/// - `validate_input` runs before anything leaves the process; a failure
///   must name the offending field.
/// - `Output` deserialization is the last step of schema enforcement, so
///   value objects inside it may reject malformed content on their own.
pub trait Flow: Send + Sync + 'static {
    /// Which flow this is; selects template and output schema.
    const KIND: FlowKind;

    /// Request shape, serialized with wire names to fill the template.
    type Input: Serialize + Send + Sync;

    /// Result shape as the model must produce it.
    type Output: DeserializeOwned + Serialize + Send;

    /// Local checks on the request (non-empty text, numeric ranges).
    fn validate_input(input: &Self::Input) -> Result<(), ValidationError>;

    /// Builds the user prompt for a validated request.
    fn render_prompt(input: &Self::Input) -> Result<String, PromptError> {
        render_input(template_for(Self::KIND), input)
    }

    /// Post-processing applied after the output passed validation.
    fn finalize(_input: &Self::Input, output: Self::Output) -> Self::Output {
        output
    }
}
