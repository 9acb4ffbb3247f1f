//! FlowRunner - Executes any flow as one round trip to the generation backend.

use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use super::FlowError;
use crate::domain::flows::{extract_json_object, templates::output_instruction, Flow, FlowKind};
use crate::ports::{
    AIProvider, CompletionRequest, FlowSchemaValidator, MessageRole, RequestMetadata,
    SchemaValidationError,
};

/// Sampling settings applied to every generated request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Generic invocation wrapper shared by every flow.
///
/// Steps, in order: validate input, render the prompt, one provider call,
/// extract the JSON object, validate it against the flow schema, deserialize,
/// finalize. A validation failure returns before the provider is touched.
pub struct FlowRunner {
    provider: Arc<dyn AIProvider>,
    validator: Arc<dyn FlowSchemaValidator>,
    settings: GenerationSettings,
}

impl FlowRunner {
    pub fn new(provider: Arc<dyn AIProvider>, validator: Arc<dyn FlowSchemaValidator>) -> Self {
        Self {
            provider,
            validator,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Output schema of a flow, as sent to the model.
    pub fn schema_for(&self, kind: FlowKind) -> &serde_json::Value {
        self.validator.schema_for(kind)
    }

    pub async fn run<F: Flow>(&self, input: F::Input) -> Result<F::Output, FlowError> {
        let kind = F::KIND;

        if let Err(err) = F::validate_input(&input) {
            debug!(flow = %kind, field = err.field(), "Rejected flow input");
            return Err(err.into());
        }

        let prompt = F::render_prompt(&input)?;
        let trace_id = Uuid::new_v4().to_string();
        let request = CompletionRequest::new(RequestMetadata::new(
            kind.operation_name(),
            trace_id.clone(),
        ))
        .with_system_prompt(output_instruction(&self.validator.schema_for(kind).to_string()))
        .with_message(MessageRole::User, prompt)
        .with_max_tokens(self.settings.max_tokens)
        .with_temperature(self.settings.temperature)
        .expecting_json();

        debug!(flow = %kind, trace_id = %trace_id, "Running flow");

        let response = self.provider.complete(request).await.map_err(|e| {
            error!(flow = %kind, trace_id = %trace_id, error = %e, "Generation backend failed");
            FlowError::from(e)
        })?;

        let output = self.decode::<F>(&response.content).map_err(|e| {
            error!(flow = %kind, trace_id = %trace_id, error = %e, "Generated payload rejected");
            FlowError::from(e)
        })?;

        Ok(F::finalize(&input, output))
    }

    fn decode<F: Flow>(&self, content: &str) -> Result<F::Output, SchemaValidationError> {
        let payload = extract_json_object(content)
            .map_err(|e| SchemaValidationError::generic(e.to_string()))?;
        self.validator.validate(F::KIND, &payload)?;
        serde_json::from_value(payload).map_err(|e| SchemaValidationError::generic(e.to_string()))
    }
}
