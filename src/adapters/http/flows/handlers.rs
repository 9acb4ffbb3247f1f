//! HTTP handlers for flow endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::flows::{FlowError, FlowRunner};
use crate::domain::flows::{Flow, FlowKind, ReverseGeocode, SUPPORTED_LANGUAGES};

use super::dto::{FlowSchemaResponse, LanguageListResponse, ReverseGeocodeRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FlowHandlers {
    runner: Arc<FlowRunner>,
}

impl FlowHandlers {
    pub fn new(runner: Arc<FlowRunner>) -> Self {
        Self { runner }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/flows/{flow} - Run one flow with its typed request body
pub async fn run_flow<F>(
    State(handlers): State<FlowHandlers>,
    payload: Result<Json<F::Input>, JsonRejection>,
) -> Response
where
    F: Flow,
    F::Input: DeserializeOwned + 'static,
{
    let Json(input) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return ErrorResponse::bad_request(rejection.body_text())
                .with_status(StatusCode::BAD_REQUEST)
        }
    };

    match handlers.runner.run::<F>(input).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(e) => handle_flow_error(F::KIND, e),
    }
}

/// POST /api/flows/reverse-geocode - Resolve coordinates to a place name
pub async fn reverse_geocode(
    State(handlers): State<FlowHandlers>,
    payload: Result<Json<ReverseGeocodeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return ErrorResponse::bad_request(rejection.body_text())
                .with_status(StatusCode::BAD_REQUEST)
        }
    };

    let query = match req.into_query() {
        Ok(query) => query,
        Err(e) => return handle_flow_error(FlowKind::ReverseGeocode, e.into()),
    };

    match handlers.runner.run::<ReverseGeocode>(query).await {
        Ok(place) => (StatusCode::OK, Json(place)).into_response(),
        Err(e) => handle_flow_error(FlowKind::ReverseGeocode, e),
    }
}

/// GET /api/flows/:flow/schema - Output schema sent to the model
pub async fn get_flow_schema(
    State(handlers): State<FlowHandlers>,
    Path(flow): Path<String>,
) -> Response {
    let kind = match flow.parse::<FlowKind>() {
        Ok(kind) => kind,
        Err(_) => return ErrorResponse::not_found("Flow", &flow).with_status(StatusCode::NOT_FOUND),
    };

    let response = FlowSchemaResponse {
        flow: kind,
        operation: kind.operation_name(),
        schema: handlers.runner.schema_for(kind).clone(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/chat/languages - Languages offered by the chatbot
pub async fn list_languages() -> Json<LanguageListResponse> {
    Json(LanguageListResponse {
        languages: SUPPORTED_LANGUAGES,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_flow_error(kind: FlowKind, error: FlowError) -> Response {
    match error {
        FlowError::Validation(err) => {
            ErrorResponse::validation(&err).with_status(StatusCode::BAD_REQUEST)
        }
        other => ErrorResponse::new(other.code(), other.client_message(kind))
            .with_status(StatusCode::BAD_GATEWAY),
    }
}
