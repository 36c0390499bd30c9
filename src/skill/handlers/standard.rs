//! The fixed single-branch handlers: decline, help, stop, session end.

use anyhow::Result;
use async_trait::async_trait;

use crate::envelope::{Request, Response};
use crate::skill::{HandlerInput, RequestHandler};

const DECLINE: &str = "Alrighty, no problem. When you want me to set a reminder for you just holler.";
const HELP: &str = "To use this skill say open banana stand. Then confirm with yes and a \
     reminder will be scheduled so you'll get your daily dose of banana!";
const FAREWELL: &str = "Thanks for trying out Banana Stand. Goodbye!";

/// The user declined the reminder offer.
pub struct NoIntentHandler;

#[async_trait]
impl RequestHandler for NoIntentHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent("AMAZON.NoIntent")
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(DECLINE).build())
    }
}

pub struct HelpIntentHandler;

#[async_trait]
impl RequestHandler for HelpIntentHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent("AMAZON.HelpIntent")
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(HELP).reprompt(HELP).build())
    }
}

/// Cancel and stop share the farewell.
pub struct CancelAndStopIntentHandler;

#[async_trait]
impl RequestHandler for CancelAndStopIntentHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent("AMAZON.CancelIntent") || input.is_intent("AMAZON.StopIntent")
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(FAREWELL).build())
    }
}

/// End-of-session notification: nothing to clean up, nothing to say. The
/// platform ignores the response body for this request kind anyway.
pub struct SessionEndedRequestHandler;

#[async_trait]
impl RequestHandler for SessionEndedRequestHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        matches!(input.request(), Request::SessionEndedRequest(_))
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().build())
    }
}
