//! Reminder creation: the permission-gated Yes-intent flow.
//!
//! Three steps with early returns: no grant yet means a voice-consent
//! directive goes out instead of a reminder; otherwise the fixed daily
//! payload is POSTed to the Reminders API and the outcome becomes either the
//! confirmation or the apology. An API failure is logged and swallowed here;
//! it never reaches the error chain.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::America::Los_Angeles;
use chrono_tz::Tz;
use log::{error, info};

use crate::envelope::{Directive, Response};
use crate::reminders::{
    AlertInfo, PushNotification, Recurrence, ReminderRequest, SpokenText, Trigger, TriggerType,
    REMINDERS_PERMISSION_SCOPE,
};
use crate::skill::{HandlerInput, RequestHandler};

const CONFIRMATION: &str =
    "You successfully schedule a daily reminder at one p. m. to get a banana!";
const APOLOGY: &str = "There was an error scheduling your reminder. Please try again later.";

const REMINDER_TEXT: &str = "Time to get yo banana";
const REMINDER_LOCALE: &str = "en-US";
const TIME_ZONE_ID: &str = "America/Los_Angeles";

/// Wall-clock format the Reminders API expects: local time, no offset.
const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The fixed payload: a daily 13:00 Pacific reminder to get a banana.
///
/// `scheduled_time` is today's date at 13:00:00 in the trigger's zone, even
/// when `now` is already past one o'clock; the API fires the first occurrence
/// the next day in that case.
fn build_reminder_request(now: DateTime<Tz>) -> ReminderRequest {
    ReminderRequest {
        request_time: now.format(WALL_CLOCK_FORMAT).to_string(),
        trigger: Trigger {
            trigger_type: TriggerType::ScheduledAbsolute,
            scheduled_time: format!("{}T13:00:00", now.format("%Y-%m-%d")),
            time_zone_id: TIME_ZONE_ID.to_string(),
            recurrence: Some(Recurrence::daily()),
        },
        alert_info: AlertInfo::spoken(SpokenText::new(REMINDER_LOCALE, REMINDER_TEXT)),
        push_notification: PushNotification::enabled(),
    }
}

pub struct CreateReminderHandler;

#[async_trait]
impl RequestHandler for CreateReminderHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent("AMAZON.YesIntent")
    }

    async fn handle(&self, input: &HandlerInput) -> Result<Response> {
        // Without the grant there is nothing to schedule yet; ask the
        // platform to run the voice-consent flow. Its answer comes back as a
        // Connections.Response handled elsewhere.
        if !input.permissions_granted() {
            return Ok(Response::builder()
                .add_directive(Directive::send_consent_request(REMINDERS_PERMISSION_SCOPE))
                .build());
        }

        let reminder = build_reminder_request(Utc::now().with_timezone(&Los_Angeles));

        let outcome = match input.reminder_service() {
            Ok(service) => service.create_reminder(&reminder).await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(created) => {
                info!("created reminder {}", created.alert_token);
                Ok(Response::builder().speak(CONFIRMATION).build())
            }
            Err(err) => {
                error!("Error creating reminder: {err:#}");
                Ok(Response::builder().speak(APOLOGY).build())
            }
        }
    }
}
