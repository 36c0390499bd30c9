//! Intent reflector: interaction-model debugging aid.
//!
//! Accepts any intent request, so it must sit last in the chain or it will
//! shadow the real intent handlers.

use anyhow::Result;
use async_trait::async_trait;

use crate::envelope::Response;
use crate::skill::{HandlerInput, RequestHandler};

pub struct IntentReflectorHandler;

#[async_trait]
impl RequestHandler for IntentReflectorHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.intent_name().is_some()
    }

    async fn handle(&self, input: &HandlerInput) -> Result<Response> {
        // can_handle only passes intent requests through.
        let intent_name = input.intent_name().unwrap_or("an unknown intent");
        Ok(Response::builder()
            .speak(format!("You just triggered {intent_name}"))
            .build())
    }
}
