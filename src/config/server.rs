//! HTTP listener settings for the Questify API.
//!
//! The deployment mode decides two things the binary needs at startup: the
//! log output format and the CORS policy applied in front of the flows.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest a request may wait; a flow is a single model round trip.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// `local` or `production`
    #[serde(default)]
    pub deployment: Deployment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the API from a browser
    pub cors_origins: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Developer machine, usually next to the web app's dev server.
    #[default]
    Local,
    Production,
}

/// Log line format written by the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin.
    Permissive,
    /// Only these origins.
    AllowList(Vec<String>),
    /// No cross-origin requests.
    SameOrigin,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(raw))
    }

    pub fn is_production(&self) -> bool {
        self.deployment == Deployment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn log_format(&self) -> LogFormat {
        match self.deployment {
            Deployment::Local => LogFormat::Compact,
            Deployment::Production => LogFormat::Json,
        }
    }

    /// Configured origins win; without any, production refuses cross-origin
    /// calls and local development allows them all.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        match (origins.is_empty(), self.deployment) {
            (false, _) => CorsPolicy::AllowList(origins),
            (true, Deployment::Production) => CorsPolicy::SameOrigin,
            (true, Deployment::Local) => CorsPolicy::Permissive,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            deployment: Deployment::default(),
            log_filter: default_log_filter(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "info,questify=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    90
}
