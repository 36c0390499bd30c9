//! # Inbound request envelope
//!
//! Every invocation delivers exactly one `RequestEnvelope`: a versioned
//! wrapper around the session, the system context (user identity, permission
//! grants, API endpoint and access token for in-session service calls), and
//! the request itself — a union discriminated by its `type` field.
//!
//! The model is deliberately tolerant: unknown fields are ignored and the
//! consent-response `status` stays a plain string, so envelopes from newer
//! platform revisions still parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Envelope
// ============================================================================

/// Top-level request envelope, one per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub context: Context,
    pub request: Request,
}

impl RequestEnvelope {
    /// Permission grants live on the user inside the system context.
    pub fn permissions(&self) -> Option<&Permissions> {
        self.context.system.user.permissions.as_ref()
    }
}

/// Session block; absent for out-of-session deliveries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

/// Per-invocation context supplied by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: System,
}

/// System context: who is talking and how to call back into platform APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub user: User,
    /// Base URL for in-session platform API calls (regional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    /// Bearer token scoped to this invocation's API calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Present only once the user has granted the skill's requested scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

/// Permission grant marker. Handlers consume presence/absence only; the
/// consent token is carried through for completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_token: Option<String>,
}

// ============================================================================
// Request union
// ============================================================================

/// The request kinds this skill can receive, discriminated by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    #[serde(rename = "Connections.Response")]
    ConnectionsResponse(ConnectionsResponse),
    SessionEndedRequest(SessionEndedRequest),
}

impl Request {
    /// The platform's request id, for log correlation.
    pub fn request_id(&self) -> &str {
        match self {
            Request::LaunchRequest(r) => &r.request_id,
            Request::IntentRequest(r) => &r.request_id,
            Request::ConnectionsResponse(r) => &r.request_id,
            Request::SessionEndedRequest(r) => &r.request_id,
        }
    }

    /// Wire-level type tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::LaunchRequest(_) => "LaunchRequest",
            Request::IntentRequest(_) => "IntentRequest",
            Request::ConnectionsResponse(_) => "Connections.Response",
            Request::SessionEndedRequest(_) => "SessionEndedRequest",
        }
    }

    /// Intent name when this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        match self {
            Request::IntentRequest(r) => Some(r.intent.name.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<String>,
}

/// A named user-utterance classification, with any filled slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<HashMap<String, Slot>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Result of a `Connections.SendRequest` round trip (e.g. the voice consent
/// flow answering an `AskFor`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsResponse {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Name of the connection being answered, e.g. `"AskFor"`.
    pub name: String,
    #[serde(default)]
    pub payload: ConnectionsResponsePayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConnectionsStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Consent outcome. `status` is one of `ACCEPTED`, `DENIED` or `NOT_ANSWERED`
/// on the wire; it is kept as a string because the handler only ever compares
/// against `DENIED` and lets everything else fall through together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsResponsePayload {
    #[serde(default)]
    pub status: String,
    /// Whether the companion-app consent card has already been sent.
    #[serde(default)]
    pub is_card_thrown: bool,
}

/// Transport-level status of the connections round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsStatus {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionEndedError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndedError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn launch_envelope() -> serde_json::Value {
        json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.abc123"
            },
            "context": {
                "System": {
                    "user": { "userId": "amzn1.ask.account.user1" },
                    "apiEndpoint": "https://api.amazonalexa.com",
                    "apiAccessToken": "token-xyz",
                    "application": { "applicationId": "amzn1.ask.skill.banana" },
                    "device": { "deviceId": "amzn1.ask.device.echo1" }
                },
                "Viewport": { "shape": "ROUND" }
            },
            "request": {
                "type": "LaunchRequest",
                "requestId": "amzn1.echo-api.request.launch1",
                "timestamp": "2023-04-01T20:00:00Z",
                "locale": "en-US"
            }
        })
    }

    #[test]
    fn parses_launch_request() {
        let envelope: RequestEnvelope = serde_json::from_value(launch_envelope()).unwrap();

        assert_eq!(envelope.version, "1.0");
        assert!(matches!(envelope.request, Request::LaunchRequest(_)));
        assert_eq!(envelope.request.kind(), "LaunchRequest");
        assert_eq!(envelope.request.request_id(), "amzn1.echo-api.request.launch1");
        assert_eq!(envelope.request.intent_name(), None);
        // No grant yet.
        assert!(envelope.permissions().is_none());
        assert_eq!(
            envelope.context.system.api_endpoint.as_deref(),
            Some("https://api.amazonalexa.com")
        );
    }

    #[test]
    fn parses_intent_request_with_permissions_and_slots() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {
                "System": {
                    "user": {
                        "userId": "amzn1.ask.account.user1",
                        "permissions": { "consentToken": "consent-abc" }
                    },
                    "apiEndpoint": "https://api.amazonalexa.com",
                    "apiAccessToken": "token-xyz"
                }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.intent1",
                "timestamp": "2023-04-01T20:00:05Z",
                "locale": "en-US",
                "dialogState": "COMPLETED",
                "intent": {
                    "name": "AMAZON.YesIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "fruit": { "name": "fruit", "value": "banana" }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(envelope.request.intent_name(), Some("AMAZON.YesIntent"));
        let perms = envelope.permissions().expect("permissions present");
        assert_eq!(perms.consent_token.as_deref(), Some("consent-abc"));

        match &envelope.request {
            Request::IntentRequest(req) => {
                let slots = req.intent.slots.as_ref().unwrap();
                assert_eq!(slots["fruit"].value.as_deref(), Some("banana"));
            }
            other => panic!("expected IntentRequest, got {}", other.kind()),
        }
    }

    #[test]
    fn parses_connections_response() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {
                "System": { "user": { "userId": "amzn1.ask.account.user1" } }
            },
            "request": {
                "type": "Connections.Response",
                "requestId": "amzn1.echo-api.request.conn1",
                "timestamp": "2023-04-01T20:01:00Z",
                "locale": "en-US",
                "name": "AskFor",
                "status": { "code": "200", "message": "OK" },
                "payload": { "status": "DENIED", "isCardThrown": false },
                "token": ""
            }
        }))
        .unwrap();

        match &envelope.request {
            Request::ConnectionsResponse(req) => {
                assert_eq!(req.name, "AskFor");
                assert_eq!(req.payload.status, "DENIED");
                assert!(!req.payload.is_card_thrown);
                assert_eq!(req.status.as_ref().unwrap().code, "200");
            }
            other => panic!("expected Connections.Response, got {}", other.kind()),
        }
    }

    #[test]
    fn connections_payload_defaults_when_missing() {
        // Some deliveries omit the payload entirely; the handler must still run.
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {
                "System": { "user": { "userId": "amzn1.ask.account.user1" } }
            },
            "request": {
                "type": "Connections.Response",
                "requestId": "amzn1.echo-api.request.conn2",
                "timestamp": "2023-04-01T20:01:00Z",
                "name": "AskFor"
            }
        }))
        .unwrap();

        match &envelope.request {
            Request::ConnectionsResponse(req) => {
                assert_eq!(req.payload.status, "");
                assert!(!req.payload.is_card_thrown);
            }
            other => panic!("expected Connections.Response, got {}", other.kind()),
        }
    }

    #[test]
    fn parses_session_ended_request() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {
                "System": { "user": { "userId": "amzn1.ask.account.user1" } }
            },
            "request": {
                "type": "SessionEndedRequest",
                "requestId": "amzn1.echo-api.request.end1",
                "timestamp": "2023-04-01T20:02:00Z",
                "locale": "en-US",
                "reason": "ERROR",
                "error": {
                    "type": "INVALID_RESPONSE",
                    "message": "Directive not supported"
                }
            }
        }))
        .unwrap();

        match &envelope.request {
            Request::SessionEndedRequest(req) => {
                assert_eq!(req.reason.as_deref(), Some("ERROR"));
                assert_eq!(req.error.as_ref().unwrap().error_type, "INVALID_RESPONSE");
            }
            other => panic!("expected SessionEndedRequest, got {}", other.kind()),
        }
    }

    #[test]
    fn unknown_intent_names_are_preserved() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "context": {
                "System": { "user": { "userId": "amzn1.ask.account.user1" } }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.intent2",
                "timestamp": "2023-04-01T20:00:05Z",
                "intent": { "name": "OrderNachosIntent" }
            }
        }))
        .unwrap();

        assert_eq!(envelope.request.intent_name(), Some("OrderNachosIntent"));
    }
}
