//! # Skill Dispatch
//!
//! Handler-chain dispatch for incoming request envelopes: the
//! [`RequestHandler`]/[`ErrorHandler`] traits, the per-invocation
//! [`HandlerInput`], and the [`Skill`] that walks the chain and returns the
//! first willing handler's response.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Route unhandled requests through the error-handler chain
//! - 1.1.0: Add error-handler chain
//! - 1.0.0: Initial handler trait, input context, and dispatch loop

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;

pub use context::HandlerInput;
pub use dispatcher::{Skill, SkillBuilder};
pub use handler::{ErrorHandler, RequestHandler};
pub use handlers::stock_skill;
