//! HTTP adapter for flow endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{FlowSchemaResponse, LanguageListResponse, ReverseGeocodeRequest};
pub use handlers::{list_languages, FlowHandlers};
pub use routes::flow_routes;
