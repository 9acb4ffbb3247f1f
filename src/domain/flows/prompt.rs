//! Prompt rendering: `{{field}}` placeholders filled from a flow input.
//!
//! Inputs are serialized with their wire (camelCase) names, so a template
//! refers to `{{departureDate}}` rather than the Rust field name.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while rendering a prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("template references unknown variable '{0}'")]
    MissingVariable(String),

    #[error("variable '{0}' is not a scalar value")]
    UnsupportedValue(String),

    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),

    #[error("flow input must serialize to an object: {0}")]
    InvalidInput(String),
}

/// Renders `template` with the fields of `input`.
pub fn render_input<T: Serialize>(template: &str, input: &T) -> Result<String, PromptError> {
    match serde_json::to_value(input) {
        Ok(Value::Object(vars)) => render(template, &vars),
        Ok(other) => Err(PromptError::InvalidInput(format!("got {}", other))),
        Err(e) => Err(PromptError::InvalidInput(e.to_string())),
    }
}

/// Substitutes every `{{name}}` in `template` with the matching variable.
pub fn render(template: &str, vars: &Map<String, Value>) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = after_open
            .find("}}")
            .ok_or(PromptError::Unterminated(offset + start))?;
        let name = after_open[..end].trim();

        let value = vars
            .get(name)
            .ok_or_else(|| PromptError::MissingVariable(name.to_string()))?;
        match value {
            Value::String(s) => out.push_str(s),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            _ => return Err(PromptError::UnsupportedValue(name.to_string())),
        }

        let consumed = start + 2 + end + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Names of all placeholders in a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };
        names.push(after_open[..end].trim());
        rest = &after_open[end + 2..];
    }
    names
}
