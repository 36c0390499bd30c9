//! Shared per-invocation context for handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Expose the reminder service through the API client factory
//! - 1.0.0: Initial implementation wrapping the request envelope

use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::envelope::{Request, RequestEnvelope};
use crate::reminders::{ApiClientFactory, ReminderManagementService};

/// Everything a handler gets to see for one invocation: the parsed envelope
/// and, when configured, the factory for in-session service clients. Built
/// fresh per dispatch and dropped with it.
#[derive(Clone)]
pub struct HandlerInput {
    pub envelope: RequestEnvelope,
    services: Option<Arc<dyn ApiClientFactory>>,
}

impl HandlerInput {
    pub fn new(envelope: RequestEnvelope, services: Option<Arc<dyn ApiClientFactory>>) -> Self {
        HandlerInput { envelope, services }
    }

    pub fn request(&self) -> &Request {
        &self.envelope.request
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.envelope.request.intent_name()
    }

    /// True when the request is an intent request with the given name.
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    /// Whether the user has granted the skill's requested permission scopes.
    /// Presence of the grant block is all the platform promises.
    pub fn permissions_granted(&self) -> bool {
        self.envelope.permissions().is_some()
    }

    /// Reminder service bound to this invocation's credentials.
    pub fn reminder_service(&self) -> Result<Arc<dyn ReminderManagementService>> {
        let services = self.services.as_ref().ok_or_else(|| {
            anyhow!("No API client factory configured; register one with SkillBuilder::api_client")
        })?;
        services.reminder_management(&self.envelope.context.system)
    }
}
