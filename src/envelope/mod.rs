//! # Request/Response Envelope
//!
//! Serde model of the voice platform's JSON envelopes: the request side the
//! platform POSTs at the skill for every invocation, and the response side the
//! skill hands back. One envelope in, one envelope out, nothing retained in
//! between.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add Connections.Response request variant and consent card/directive types
//! - 1.0.0: Initial request/response model with ResponseBuilder

#[cfg(test)]
pub(crate) mod fixtures;
pub mod request;
pub mod response;

pub use request::{
    ConnectionsResponsePayload, Context, Intent, Permissions, Request, RequestEnvelope, Session,
    Slot, System, User,
};
pub use response::{
    Card, Directive, OutputSpeech, PermissionsConsentPayload, Reprompt, Response, ResponseBuilder,
    ResponseEnvelope,
};
