//! Skill builder and dispatch loop
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Route unhandled requests through the error-handler chain
//! - 1.1.0: Add error-handler chain and API client factory
//! - 1.0.0: Initial builder and first-match dispatch

use anyhow::{anyhow, Result};
use log::{debug, error};
use std::sync::Arc;

use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::reminders::ApiClientFactory;

use super::context::HandlerInput;
use super::handler::{ErrorHandler, RequestHandler};

/// An assembled skill: the request-handler chain, the error-handler chain,
/// and the optional API client factory, all in caller-defined order.
///
/// Dispatch is first-match-wins over the request chain. A handler error, or a
/// request nothing accepted, is routed through the error chain the same way.
/// Immutable once built; share it with `Arc` across concurrent invocations.
pub struct Skill {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    error_handlers: Vec<Arc<dyn ErrorHandler>>,
    api_client: Option<Arc<dyn ApiClientFactory>>,
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// Process one request envelope to completion.
    ///
    /// Returns an error only when the error chain itself declines, which a
    /// skill with a catch-all error handler never does.
    pub async fn dispatch(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope> {
        let input = HandlerInput::new(envelope, self.api_client.clone());

        let outcome = match self.matching_handler(&input) {
            Some(handler) => handler.handle(&input).await,
            None => Err(anyhow!(
                "Unable to find a suitable request handler for {}",
                self.describe(&input)
            )),
        };

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                let error_handler = self
                    .error_handlers
                    .iter()
                    .find(|h| h.can_handle(&input, &err))
                    .ok_or_else(|| {
                        error!("No error handler accepted: {err:#}");
                        anyhow!("Unhandled error for {}: {err}", self.describe(&input))
                    })?;
                error_handler.handle(&input, &err).await
            }
        };

        Ok(ResponseEnvelope::new(response))
    }

    fn matching_handler(&self, input: &HandlerInput) -> Option<&Arc<dyn RequestHandler>> {
        let handler = self.request_handlers.iter().find(|h| h.can_handle(input));
        if handler.is_none() {
            debug!("no request handler accepted {}", self.describe(input));
        }
        handler
    }

    fn describe(&self, input: &HandlerInput) -> String {
        match input.intent_name() {
            Some(name) => format!("{} ({name})", input.request().kind()),
            None => input.request().kind().to_string(),
        }
    }
}

/// Assembles a [`Skill`]. Registration order is dispatch order.
#[derive(Default)]
pub struct SkillBuilder {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    error_handlers: Vec<Arc<dyn ErrorHandler>>,
    api_client: Option<Arc<dyn ApiClientFactory>>,
}

impl SkillBuilder {
    /// Append a request handler to the end of the chain.
    pub fn request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.request_handlers.push(Arc::new(handler));
        self
    }

    /// Append an error handler to the end of the error chain.
    pub fn error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handlers.push(Arc::new(handler));
        self
    }

    /// Install the factory handlers use for in-session service clients.
    pub fn api_client(mut self, factory: impl ApiClientFactory + 'static) -> Self {
        self.api_client = Some(Arc::new(factory));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            request_handlers: self.request_handlers,
            error_handlers: self.error_handlers,
            api_client: self.api_client,
        }
    }
}
