//! LoadSessionHandler - Resolves the session context from stored flags.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::AnonymousId;
use crate::domain::session::{SessionContext, ANONYMOUS_ID_KEY, CONSENT_KEY};
use crate::ports::{SessionStore, SessionStoreError};

/// Loads consent and the anonymous id, creating the id on first use.
///
/// A stored id that fails to parse is replaced rather than trusted.
pub struct LoadSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl LoadSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<SessionContext, SessionStoreError> {
        let consent = SessionContext::parse_consent(self.store.get(CONSENT_KEY).await?.as_deref());

        let anonymous_id = match self.store.get(ANONYMOUS_ID_KEY).await? {
            Some(stored) => match AnonymousId::parse(stored) {
                Ok(id) => id,
                Err(err) => {
                    warn!(error = %err, "Stored anonymous id is invalid, issuing a new one");
                    self.issue_id().await?
                }
            },
            None => self.issue_id().await?,
        };

        Ok(SessionContext::new(anonymous_id, consent))
    }

    async fn issue_id(&self) -> Result<AnonymousId, SessionStoreError> {
        let id = AnonymousId::generate();
        self.store.set(ANONYMOUS_ID_KEY, id.as_str()).await?;
        debug!(anonymous_id = %id, "Issued anonymous id");
        Ok(id)
    }
}
