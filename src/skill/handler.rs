//! Request and error handler traits
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add ErrorHandler
//! - 1.0.0: Initial RequestHandler trait

use anyhow::Result;
use async_trait::async_trait;

use crate::envelope::Response;

use super::context::HandlerInput;

/// A candidate handler in the skill's chain.
///
/// Handlers are tried in registration order; the first one whose
/// `can_handle` returns true gets the request, and nothing after it is
/// consulted. Predicates may overlap — position in the chain is the
/// tie-breaker.
///
/// # Example
///
/// ```ignore
/// pub struct LaunchHandler;
///
/// #[async_trait]
/// impl RequestHandler for LaunchHandler {
///     fn can_handle(&self, input: &HandlerInput) -> bool {
///         matches!(input.request(), Request::LaunchRequest(_))
///     }
///
///     async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
///         Ok(Response::builder().speak("Welcome!").build())
///     }
/// }
/// ```
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Whether this handler wants the request.
    fn can_handle(&self, input: &HandlerInput) -> bool;

    /// Produce the response. An error here is routed through the skill's
    /// error-handler chain.
    async fn handle(&self, input: &HandlerInput) -> Result<Response>;
}

/// A candidate in the error-handler chain, consulted when a request handler
/// fails or nothing accepted the request. Selection works exactly like the
/// request chain; the stock catch-all accepts everything, so a built skill
/// always answers.
#[async_trait]
pub trait ErrorHandler: Send + Sync {
    /// Whether this handler wants the error.
    fn can_handle(&self, input: &HandlerInput, error: &anyhow::Error) -> bool;

    /// Produce the fallback response. Error handlers are the end of the line
    /// and therefore infallible.
    async fn handle(&self, input: &HandlerInput, error: &anyhow::Error) -> Response;
}
