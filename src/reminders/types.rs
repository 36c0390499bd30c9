//! Value types for the Reminders API, matching its JSON contract.
//!
//! Scheduled times travel as zone-local wall-clock strings
//! (`YYYY-MM-DDTHH:MM:SS`, no offset) alongside an IANA `timeZoneId`; the
//! fixed vocabulary fields are typed enums serialized in the API's
//! SCREAMING_SNAKE spelling.

use serde::{Deserialize, Serialize};

/// A create-reminder request. Built fresh per call, POSTed once, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    /// Wall-clock time of the request in the trigger's timezone.
    pub request_time: String,
    pub trigger: Trigger,
    pub alert_info: AlertInfo,
    pub push_notification: PushNotification,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    /// Wall-clock fire time in `time_zone_id`, `YYYY-MM-DDTHH:MM:SS`.
    pub scheduled_time: String,
    pub time_zone_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    ScheduledAbsolute,
    ScheduledRelative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recurrence {
    pub freq: RecurrenceFreq,
}

impl Recurrence {
    pub fn daily() -> Self {
        Recurrence {
            freq: RecurrenceFreq::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceFreq {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertInfo {
    pub spoken_info: SpokenInfo,
}

impl AlertInfo {
    /// Single-locale spoken alert.
    pub fn spoken(content: SpokenText) -> Self {
        AlertInfo {
            spoken_info: SpokenInfo {
                content: vec![content],
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpokenInfo {
    pub content: Vec<SpokenText>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpokenText {
    pub locale: String,
    pub text: String,
}

impl SpokenText {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        SpokenText {
            locale: locale.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PushNotification {
    pub status: PushNotificationStatus,
}

impl PushNotification {
    pub fn enabled() -> Self {
        PushNotification {
            status: PushNotificationStatus::Enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushNotificationStatus {
    Enabled,
    Disabled,
}

/// What the API answers on success. Lenient on purpose: only the alert token
/// is interesting, and only for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReminder {
    #[serde(default)]
    pub alert_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reminder_request_matches_api_contract() {
        let request = ReminderRequest {
            request_time: "2023-04-01T09:15:30".to_string(),
            trigger: Trigger {
                trigger_type: TriggerType::ScheduledAbsolute,
                scheduled_time: "2023-04-01T13:00:00".to_string(),
                time_zone_id: "America/Los_Angeles".to_string(),
                recurrence: Some(Recurrence::daily()),
            },
            alert_info: AlertInfo::spoken(SpokenText::new("en-US", "Time to get yo banana")),
            push_notification: PushNotification::enabled(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "requestTime": "2023-04-01T09:15:30",
                "trigger": {
                    "type": "SCHEDULED_ABSOLUTE",
                    "scheduledTime": "2023-04-01T13:00:00",
                    "timeZoneId": "America/Los_Angeles",
                    "recurrence": { "freq": "DAILY" }
                },
                "alertInfo": {
                    "spokenInfo": {
                        "content": [ { "locale": "en-US", "text": "Time to get yo banana" } ]
                    }
                },
                "pushNotification": { "status": "ENABLED" }
            })
        );
    }

    #[test]
    fn created_reminder_tolerates_extra_fields() {
        let created: CreatedReminder = serde_json::from_value(json!({
            "alertToken": "alert-123",
            "createdTime": "2023-04-01T16:15:30.000Z",
            "updatedTime": "2023-04-01T16:15:30.000Z",
            "status": "ON",
            "version": "1",
            "href": "/v1/alerts/reminders/alert-123"
        }))
        .unwrap();

        assert_eq!(created.alert_token, "alert-123");
        assert_eq!(created.status.as_deref(), Some("ON"));
    }

    #[test]
    fn created_reminder_tolerates_missing_fields() {
        let created: CreatedReminder = serde_json::from_value(json!({})).unwrap();
        assert!(created.alert_token.is_empty());
    }
}
