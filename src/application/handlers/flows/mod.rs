//! Flow execution.

mod errors;
mod runner;

pub use errors::FlowError;
pub use runner::{FlowRunner, GenerationSettings};
