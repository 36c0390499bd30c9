//! # Stock Handlers
//!
//! The banana stand's handler set and its canonical registration order. The
//! order matters: the reflector accepts every intent request and the error
//! handler accepts every error, so both sit at the end of their chains.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial handler set and canonical registration order

mod consent;
mod error;
mod launch;
mod reflector;
mod reminder;
mod standard;

pub use consent::ConnectionsResponseHandler;
pub use error::GenericErrorHandler;
pub use launch::LaunchRequestHandler;
pub use reflector::IntentReflectorHandler;
pub use reminder::CreateReminderHandler;
pub use standard::{
    CancelAndStopIntentHandler, HelpIntentHandler, NoIntentHandler, SessionEndedRequestHandler,
};

use crate::reminders::ApiClientFactory;

use super::Skill;

/// The fully wired skill: every stock handler in canonical order, the
/// catch-all error handler, and the given API client factory.
pub fn stock_skill(api_client: impl ApiClientFactory + 'static) -> Skill {
    Skill::builder()
        .request_handler(LaunchRequestHandler)
        .request_handler(CreateReminderHandler)
        .request_handler(NoIntentHandler)
        .request_handler(ConnectionsResponseHandler)
        .request_handler(HelpIntentHandler)
        .request_handler(CancelAndStopIntentHandler)
        .request_handler(SessionEndedRequestHandler)
        .request_handler(IntentReflectorHandler)
        .error_handler(GenericErrorHandler)
        .api_client(api_client)
        .build()
}
