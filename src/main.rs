//! Questify API server.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use questify::adapters::ai::{AnthropicConfig, AnthropicProvider, OpenAIConfig, OpenAIProvider};
use questify::adapters::http::{app_router, FlowHandlers, TripHandlers};
use questify::adapters::telemetry::SimulatedTripUploader;
use questify::adapters::validation::JsonSchemaValidator;
use questify::application::handlers::flows::{FlowRunner, GenerationSettings};
use questify::application::handlers::trips::UploadTripHandler;
use questify::config::{
    AiConfig, AiProvider, AppConfig, CorsPolicy, LogFormat, ServerConfig, ValidationError,
};
use questify::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let provider = build_provider(&config.ai)?;
    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "Generation backend ready");

    let runner = FlowRunner::new(provider, Arc::new(JsonSchemaValidator::new())).with_settings(
        GenerationSettings {
            max_tokens: config.ai.max_tokens,
            temperature: config.ai.temperature,
        },
    );
    let uploader = SimulatedTripUploader::new(config.telemetry.reference_prefix.clone());

    let app = app_router(
        FlowHandlers::new(Arc::new(runner)),
        TripHandlers::new(Arc::new(UploadTripHandler::new(Arc::new(uploader)))),
    )
    .layer(TimeoutLayer::new(config.server.request_timeout()))
    .layer(cors_layer(&config.server))
    .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, deployment = ?config.server.deployment, "Questify listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Questify stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_filter.as_str()));

    match server.log_format() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init(),
    }
}

fn build_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, Box<dyn Error>> {
    match ai.primary_provider {
        AiProvider::Anthropic => {
            let key = ai
                .anthropic_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))?;
            let mut config = AnthropicConfig::new(key).with_timeout(ai.timeout());
            if let Some(model) = &ai.model {
                config = config.with_model(model.clone());
            }
            Ok(Arc::new(AnthropicProvider::new(config)?))
        }
        AiProvider::OpenAI => {
            let key = ai
                .openai_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
            let mut config = OpenAIConfig::new(key).with_timeout(ai.timeout());
            if let Some(model) = &ai.model {
                config = config.with_model(model.clone());
            }
            Ok(Arc::new(OpenAIProvider::new(config)?))
        }
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = match server.cors_policy() {
        CorsPolicy::Permissive => return CorsLayer::permissive(),
        CorsPolicy::SameOrigin => return CorsLayer::new(),
        CorsPolicy::AllowList(origins) => origins,
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
    }
}
