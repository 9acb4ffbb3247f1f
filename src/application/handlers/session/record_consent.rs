//! RecordConsentHandler - Stores the user's location tracking choice.

use std::sync::Arc;

use tracing::info;

use super::LoadSessionHandler;
use crate::domain::session::{SessionContext, CONSENT_KEY};
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Clone, Copy)]
pub struct RecordConsentCommand {
    pub consent: bool,
}

pub struct RecordConsentHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordConsentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Persists the choice and returns the refreshed session context.
    pub async fn handle(
        &self,
        cmd: RecordConsentCommand,
    ) -> Result<SessionContext, SessionStoreError> {
        self.store
            .set(CONSENT_KEY, SessionContext::consent_value(cmd.consent))
            .await?;
        info!(consent = cmd.consent, "Tracking consent recorded");

        LoadSessionHandler::new(Arc::clone(&self.store)).handle().await
    }
}
