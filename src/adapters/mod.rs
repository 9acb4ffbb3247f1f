//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generation backends (Anthropic, OpenAI, mock)
//! - `http` - REST API over the flows and trip telemetry
//! - `session_store` - In-memory session flags
//! - `telemetry` - Simulated trip upload endpoint
//! - `tracking` - In-process position source
//! - `validation` - Flow output schema validation

pub mod ai;
pub mod http;
pub mod session_store;
pub mod telemetry;
pub mod tracking;
pub mod validation;

pub use ai::{AnthropicProvider, MockAIProvider, OpenAIProvider};
pub use session_store::InMemorySessionStore;
pub use telemetry::SimulatedTripUploader;
pub use tracking::ChannelPositionSource;
pub use validation::JsonSchemaValidator;
