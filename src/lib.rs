// Core layer - configuration and shared types
pub mod core;

// Envelope layer - the platform's request/response JSON model
pub mod envelope;

// Skill layer - handler chain dispatch and the stock handlers
pub mod skill;

// Reminders layer - client side of the external Reminders API
pub mod reminders;

// HTTP layer - axum webhook endpoint
pub mod server;

// Re-export core config for convenience
pub use core::Config;

// Re-export the pieces a hosting binary needs
pub use envelope::{RequestEnvelope, Response, ResponseEnvelope};
pub use reminders::{ApiClientFactory, DefaultApiClient, ReminderManagementService};
pub use skill::{stock_skill, ErrorHandler, HandlerInput, RequestHandler, Skill, SkillBuilder};
