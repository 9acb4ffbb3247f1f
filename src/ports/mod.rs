//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation Ports
//!
//! - `AIProvider` - Hosted model completions, one call per flow
//! - `FlowSchemaValidator` - Output schema enforcement per flow
//!
//! ## Telemetry Ports
//!
//! - `TripUploader` - Anonymized trip submission
//! - `PositionSource` - Live position subscriptions for the tracker
//! - `SessionStore` - Consent flag and anonymous id storage

mod ai_provider;
mod position_source;
mod schema_validator;
mod session_store;
mod trip_uploader;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use position_source::{PositionSource, PositionWatch};
pub use schema_validator::{FlowSchemaValidator, SchemaValidationError};
pub use session_store::{SessionStore, SessionStoreError};
pub use trip_uploader::{TripUploader, UploadError};
