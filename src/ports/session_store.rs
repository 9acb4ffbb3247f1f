//! Session Store Port - Device-local string key/value storage.
//!
//! Holds the consent flag and the anonymous id. Values are plain strings;
//! interpretation belongs to the session handlers.

use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads a key, `None` when unset.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Writes a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}
