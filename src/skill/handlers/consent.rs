//! Consent-response handler: the voice-permissions round trip coming back.
//!
//! The platform answers a `Connections.SendRequest`/`AskFor` directive with a
//! `Connections.Response` carrying `{status, isCardThrown}`. A denial with no
//! card sent yet gets the companion-app consent card; a card already sent gets
//! a deferral; everything else (granted or not answered) gets the
//! "should I go ahead" confirmation prompt.

use anyhow::Result;
use async_trait::async_trait;

use crate::envelope::{Request, Response};
use crate::reminders::REMINDERS_PERMISSION_SCOPE;
use crate::skill::{HandlerInput, RequestHandler};

const GRANT_IN_APP: &str = "Please go to the Alexa mobile app to grant reminders permissions.";
const DEFERRAL: &str = "Ok, no problem. When you are ready, please go to the Alexa mobile app \
     to grant reminders permissions or launch the skill and I'll ask you again.";
const CONFIRM_PROMPT: &str =
    "Should I go ahead and schedule a daily reminder at one p. m. for you to get a banana?";

pub struct ConnectionsResponseHandler;

#[async_trait]
impl RequestHandler for ConnectionsResponseHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        matches!(input.request(), Request::ConnectionsResponse(r) if r.name == "AskFor")
    }

    async fn handle(&self, input: &HandlerInput) -> Result<Response> {
        let payload = match input.request() {
            Request::ConnectionsResponse(r) => &r.payload,
            // can_handle gates this handler to connections responses.
            _ => unreachable!("ConnectionsResponseHandler invoked for a non-connections request"),
        };

        if payload.status == "DENIED" && !payload.is_card_thrown {
            return Ok(Response::builder()
                .speak(GRANT_IN_APP)
                .with_ask_for_permissions_consent_card([REMINDERS_PERMISSION_SCOPE])
                .build());
        }
        if payload.is_card_thrown {
            return Ok(Response::builder().speak(DEFERRAL).build());
        }

        // ACCEPTED and NOT_ANSWERED fall through together.
        Ok(Response::builder()
            .speak(CONFIRM_PROMPT)
            .reprompt(CONFIRM_PROMPT)
            .build())
    }
}
