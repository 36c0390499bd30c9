//! # Reminders Service
//!
//! Client side of the platform's Reminders REST API: the request/response
//! value types, the [`ReminderManagementService`] seam handlers call through,
//! and the reqwest-backed client bound to one invocation's credentials.
//! Reminder persistence is entirely the API's problem; nothing is stored here.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial create-reminder support over the v1 alerts endpoint

pub mod client;
pub mod types;

pub use client::{
    ApiClientFactory, DefaultApiClient, ReminderManagementService, RemindersApiClient,
};
pub use types::{
    AlertInfo, CreatedReminder, PushNotification, PushNotificationStatus, Recurrence,
    RecurrenceFreq, ReminderRequest, SpokenInfo, SpokenText, Trigger, TriggerType,
};

/// Permission scope covering read/write access to the skill's reminders.
pub const REMINDERS_PERMISSION_SCOPE: &str = "alexa::alerts:reminders:skill:readwrite";
