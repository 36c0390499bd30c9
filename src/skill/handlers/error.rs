//! Catch-all error handler: last line of defense for the whole chain.

use async_trait::async_trait;
use log::error;

use crate::envelope::Response;
use crate::skill::{ErrorHandler, HandlerInput};

const TRY_AGAIN: &str = "Sorry, I couldn't understand what you said. Please try again.";

/// Accepts every error. Registered at the end of the error chain so a built
/// skill always produces a response: routing failures, handler bugs and
/// unhandled request kinds all land here.
pub struct GenericErrorHandler;

#[async_trait]
impl ErrorHandler for GenericErrorHandler {
    fn can_handle(&self, _input: &HandlerInput, _error: &anyhow::Error) -> bool {
        true
    }

    async fn handle(&self, input: &HandlerInput, error: &anyhow::Error) -> Response {
        error!(
            "Error handled for {}: {error:#}",
            input.request().request_id()
        );
        Response::builder()
            .speak(TRY_AGAIN)
            .reprompt(TRY_AGAIN)
            .build()
    }
}
