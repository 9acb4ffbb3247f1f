use serde::{Deserialize, Serialize};

use crate::domain::foundation::AnonymousId;

/// Store key holding `"true"` once the traveller agreed to location tracking.
pub const CONSENT_KEY: &str = "questify_consent";

/// Store key holding the anonymous traveller id.
pub const ANONYMOUS_ID_KEY: &str = "questify_anonymous_id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub anonymous_id: AnonymousId,
    pub consent_given: bool,
}

impl SessionContext {
    pub fn new(anonymous_id: AnonymousId, consent_given: bool) -> Self {
        Self {
            anonymous_id,
            consent_given,
        }
    }

    /// Interprets the stored consent flag. Anything but `true` means no consent.
    pub fn parse_consent(stored: Option<&str>) -> bool {
        matches!(stored.map(str::trim), Some(v) if v.eq_ignore_ascii_case("true"))
    }

    /// Stored form of a consent flag.
    pub fn consent_value(consent: bool) -> &'static str {
        if consent {
            "true"
        } else {
            "false"
        }
    }

    pub fn with_consent(mut self, consent: bool) -> Self {
        self.consent_given = consent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_requires_explicit_true() {
        assert!(SessionContext::parse_consent(Some("true")));
        assert!(SessionContext::parse_consent(Some(" TRUE ")));
        assert!(!SessionContext::parse_consent(Some("yes")));
        assert!(!SessionContext::parse_consent(None));
    }

    #[test]
    fn serializes_camel_case() {
        let ctx = SessionContext::new(AnonymousId::parse("anon_1").unwrap(), true);
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["anonymousId"], "anon_1");
        assert_eq!(json["consentGiven"], true);
    }
}
