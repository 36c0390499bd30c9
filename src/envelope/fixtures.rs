//! Envelope construction helpers shared by unit tests.

use chrono::{DateTime, TimeZone, Utc};

use super::request::{
    ConnectionsResponse, ConnectionsResponsePayload, Context, Intent, IntentRequest,
    LaunchRequest, Permissions, Request, RequestEnvelope, Session, SessionEndedRequest, System,
    User,
};

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 4, 1, 20, 0, 0).unwrap()
}

pub(crate) fn system() -> System {
    System {
        user: User {
            user_id: "amzn1.ask.account.test-user".to_string(),
            access_token: None,
            permissions: None,
        },
        api_endpoint: Some("https://api.amazonalexa.com".to_string()),
        api_access_token: Some("test-api-token".to_string()),
        application: None,
        device: None,
    }
}

pub(crate) fn envelope(request: Request) -> RequestEnvelope {
    RequestEnvelope {
        version: "1.0".to_string(),
        session: Some(Session {
            new: true,
            session_id: "amzn1.echo-api.session.test".to_string(),
            attributes: None,
        }),
        context: Context { system: system() },
        request,
    }
}

/// The same envelope with the reminders grant present.
pub(crate) fn with_permissions(mut envelope: RequestEnvelope) -> RequestEnvelope {
    envelope.context.system.user.permissions = Some(Permissions {
        consent_token: Some("test-consent-token".to_string()),
    });
    envelope
}

pub(crate) fn launch() -> RequestEnvelope {
    envelope(Request::LaunchRequest(LaunchRequest {
        request_id: "amzn1.echo-api.request.launch".to_string(),
        timestamp: timestamp(),
        locale: Some("en-US".to_string()),
    }))
}

pub(crate) fn intent(name: &str) -> RequestEnvelope {
    envelope(Request::IntentRequest(IntentRequest {
        request_id: format!("amzn1.echo-api.request.{name}"),
        timestamp: timestamp(),
        locale: Some("en-US".to_string()),
        intent: Intent {
            name: name.to_string(),
            confirmation_status: None,
            slots: None,
        },
        dialog_state: None,
    }))
}

pub(crate) fn connections_response(name: &str, status: &str, is_card_thrown: bool) -> RequestEnvelope {
    envelope(Request::ConnectionsResponse(ConnectionsResponse {
        request_id: "amzn1.echo-api.request.connections".to_string(),
        timestamp: timestamp(),
        locale: Some("en-US".to_string()),
        name: name.to_string(),
        payload: ConnectionsResponsePayload {
            status: status.to_string(),
            is_card_thrown,
        },
        status: None,
        token: Some(String::new()),
    }))
}

pub(crate) fn session_ended() -> RequestEnvelope {
    envelope(Request::SessionEndedRequest(SessionEndedRequest {
        request_id: "amzn1.echo-api.request.ended".to_string(),
        timestamp: timestamp(),
        locale: Some("en-US".to_string()),
        reason: Some("USER_INITIATED".to_string()),
        error: None,
    }))
}
