//! Errors raised while running a flow.

use thiserror::Error;

use crate::domain::flows::{FlowKind, PromptError};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::{AIError, SchemaValidationError};

/// Failure of a single flow invocation.
///
/// Only `Validation` is meant for the user verbatim. Every other variant is
/// reported as the flow's static failure message while the cause goes to
/// the log.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("prompt rendering failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("generation backend failed: {0}")]
    Backend(#[from] AIError),

    #[error("generated payload rejected: {0}")]
    Schema(#[from] SchemaValidationError),
}

impl FlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::Validation(err) => err.code(),
            FlowError::Prompt(_) => ErrorCode::InternalError,
            FlowError::Backend(_) | FlowError::Schema(_) => ErrorCode::GenerationFailed,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::Validation(_))
    }

    /// Message safe to show the caller of `kind`.
    pub fn client_message(&self, kind: FlowKind) -> String {
        match self {
            FlowError::Validation(err) => err.to_string(),
            _ => kind.failure_message().to_string(),
        }
    }
}
