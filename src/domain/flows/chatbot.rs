//! Multilingual support chatbot flow.

use serde::{Deserialize, Serialize};

use super::{Flow, FlowKind};
use crate::domain::foundation::{require_text, ValidationError};

/// A language the chatbot answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered in the chat language picker.
pub const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage { code: "en", name: "English" },
    SupportedLanguage { code: "hi", name: "Hindi" },
    SupportedLanguage { code: "es", name: "Spanish" },
    SupportedLanguage { code: "fr", name: "French" },
    SupportedLanguage { code: "bn", name: "Bengali" },
    SupportedLanguage { code: "ta", name: "Tamil" },
];

/// Looks up a supported language by code.
pub fn language(code: &str) -> Option<&'static SupportedLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatMessage {
    /// Message in the user's own language.
    pub user_message: String,
    /// Language code, e.g. `hi`.
    pub user_language: String,
}

impl ChatMessage {
    pub fn new(user_message: impl Into<String>, user_language: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            user_language: user_language.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub translated_response: String,
    /// Code of the language the reply is flagged as; set from the request.
    #[serde(default)]
    pub language: String,
}

pub struct MultilingualChat;

impl Flow for MultilingualChat {
    const KIND: FlowKind = FlowKind::Chat;
    type Input = ChatMessage;
    type Output = ChatReply;

    fn validate_input(input: &ChatMessage) -> Result<(), ValidationError> {
        require_text("userMessage", &input.user_message)?;
        require_text("userLanguage", &input.user_language)?;
        if language(&input.user_language).is_none() {
            return Err(ValidationError::unsupported(
                "userLanguage",
                input.user_language.clone(),
            ));
        }
        Ok(())
    }

    fn finalize(input: &ChatMessage, mut output: ChatReply) -> ChatReply {
        output.language = input.user_language.clone();
        output
    }
}
