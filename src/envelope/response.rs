//! # Outbound response envelope
//!
//! What a handler produces: optional speech, an optional reprompt, an optional
//! card, directives for the platform to act on, and the end-of-session flag.
//! Built through [`ResponseBuilder`], returned once, never mutated afterwards.

use serde::{Deserialize, Serialize};

// ============================================================================
// Envelope
// ============================================================================

/// Top-level response wrapper handed back to the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<serde_json::Value>,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(response: Response) -> Self {
        ResponseEnvelope {
            version: "1.0".to_string(),
            session_attributes: None,
            response,
        }
    }
}

/// The response body. All fields optional; an untouched builder yields `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl Response {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Plain-text speech, if any.
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }

    /// Plain-text reprompt speech, if any.
    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|r| r.output_speech.text())
    }

    /// Effective end-of-session behavior: an absent flag ends the session.
    pub fn will_end_session(&self) -> bool {
        self.should_end_session.unwrap_or(true)
    }

    pub fn is_empty(&self) -> bool {
        *self == Response::default()
    }
}

// ============================================================================
// Speech, cards, directives
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText {
        text: String,
    },
    #[serde(rename = "SSML")]
    Ssml {
        ssml: String,
    },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        OutputSpeech::PlainText { text: text.into() }
    }

    /// The spoken text regardless of representation.
    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::PlainText { text } => text,
            OutputSpeech::Ssml { ssml } => ssml,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Card {
    Simple {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Companion-app card asking the user to grant the listed permission
    /// scopes to the skill.
    AskForPermissionsConsent { permissions: Vec<String> },
}

/// Structured instructions for the platform, discriminated by `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Connections.SendRequest")]
    ConnectionsSendRequest {
        name: String,
        payload: PermissionsConsentPayload,
        token: String,
    },
}

impl Directive {
    /// The voice-consent request the platform turns into "do you give
    /// permission" dialogue; its answer comes back as a `Connections.Response`
    /// named `AskFor`.
    pub fn send_consent_request(permission_scope: impl Into<String>) -> Self {
        Directive::ConnectionsSendRequest {
            name: "AskFor".to_string(),
            payload: PermissionsConsentPayload::for_scope(permission_scope),
            token: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsConsentPayload {
    #[serde(rename = "@type")]
    pub payload_type: String,
    #[serde(rename = "@version")]
    pub payload_version: String,
    pub permission_scope: String,
}

impl PermissionsConsentPayload {
    pub fn for_scope(permission_scope: impl Into<String>) -> Self {
        PermissionsConsentPayload {
            payload_type: "AskForPermissionsConsentRequest".to_string(),
            payload_version: "1".to_string(),
            permission_scope: permission_scope.into(),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builds one [`Response`], mirroring the platform SDK's semantics: `speak`
/// sets the output speech, `reprompt` keeps the session open, and everything
/// is optional.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.output_speech = Some(OutputSpeech::plain(text));
        self
    }

    /// Setting a reprompt implies the session stays open for the answer.
    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::plain(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.response.card = Some(card);
        self
    }

    pub fn with_ask_for_permissions_consent_card(
        mut self,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.response.card = Some(Card::AskForPermissionsConsent {
            permissions: permissions.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
