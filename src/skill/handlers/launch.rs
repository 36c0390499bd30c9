//! Launch handler: greets and offers the daily reminder.

use anyhow::Result;
use async_trait::async_trait;

use crate::envelope::{Request, Response};
use crate::skill::{HandlerInput, RequestHandler};

const WELCOME: &str =
    "Welcome to the banana stand. Would you like a daily reminder at one p. m. to get a banana?";

pub struct LaunchRequestHandler;

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        matches!(input.request(), Request::LaunchRequest(_))
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(WELCOME).reprompt(WELCOME).build())
    }
}
