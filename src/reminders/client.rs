//! Reqwest-backed Reminders API client and the per-invocation factory.
//!
//! The API is regional and credentialed per request: every envelope carries
//! the endpoint base URL and a bearer token scoped to that invocation, so a
//! client is bound to one envelope's `System` context and thrown away with it.
//! Only the underlying `reqwest::Client` (its connection pool) is shared.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use crate::envelope::System;

use super::types::{CreatedReminder, ReminderRequest};

const REMINDERS_PATH: &str = "/v1/alerts/reminders";

/// The one Reminders API operation this skill uses.
#[async_trait]
pub trait ReminderManagementService: Send + Sync {
    async fn create_reminder(&self, reminder: &ReminderRequest) -> Result<CreatedReminder>;
}

impl std::fmt::Debug for dyn ReminderManagementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn ReminderManagementService")
    }
}

/// Builds service clients for the invocation being handled.
///
/// Production uses [`DefaultApiClient`]; tests install a factory that hands
/// out recording mocks instead.
pub trait ApiClientFactory: Send + Sync {
    fn reminder_management(&self, system: &System) -> Result<Arc<dyn ReminderManagementService>>;
}

/// HTTP client for one invocation's Reminders API calls.
pub struct RemindersApiClient {
    http: reqwest::Client,
    api_endpoint: String,
    api_access_token: String,
}

impl RemindersApiClient {
    pub fn new(
        http: reqwest::Client,
        api_endpoint: impl Into<String>,
        api_access_token: impl Into<String>,
    ) -> Self {
        RemindersApiClient {
            http,
            api_endpoint: api_endpoint.into(),
            api_access_token: api_access_token.into(),
        }
    }

    fn reminders_url(&self) -> String {
        format!("{}{}", self.api_endpoint.trim_end_matches('/'), REMINDERS_PATH)
    }
}

#[async_trait]
impl ReminderManagementService for RemindersApiClient {
    async fn create_reminder(&self, reminder: &ReminderRequest) -> Result<CreatedReminder> {
        let url = self.reminders_url();
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_access_token)
            .json(reminder)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    anyhow!("Reminders API request timed out")
                } else if e.is_connect() {
                    anyhow!("Could not connect to the Reminders API")
                } else {
                    anyhow!("Reminders API request failed: {e}")
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Reminders API returned HTTP {status}: {body}"));
        }

        response
            .json::<CreatedReminder>()
            .await
            .map_err(|e| anyhow!("Invalid Reminders API response: {e}"))
    }
}

/// Stock [`ApiClientFactory`]: one pooled `reqwest::Client`, credentials taken
/// from each envelope's system context. An endpoint override (for pointing at
/// a local stand-in API) takes precedence over the envelope's `apiEndpoint`.
#[derive(Clone)]
pub struct DefaultApiClient {
    http: reqwest::Client,
    endpoint_override: Option<String>,
}

impl DefaultApiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(DefaultApiClient {
            http,
            endpoint_override: None,
        })
    }

    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }
}

impl ApiClientFactory for DefaultApiClient {
    fn reminder_management(&self, system: &System) -> Result<Arc<dyn ReminderManagementService>> {
        let api_endpoint = self
            .endpoint_override
            .clone()
            .or_else(|| system.api_endpoint.clone())
            .ok_or_else(|| anyhow!("Request context carries no API endpoint"))?;
        let api_access_token = system
            .api_access_token
            .clone()
            .ok_or_else(|| anyhow!("Request context carries no API access token"))?;

        Ok(Arc::new(RemindersApiClient::new(
            self.http.clone(),
            api_endpoint,
            api_access_token,
        )))
    }
}
