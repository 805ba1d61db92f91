//! Core logic of the chat client: the transcript, the display surface
//! abstraction, and the conversation controller tying them to an
//! answering service.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod controller;
pub mod conversation;
mod error;
mod service_client;
pub mod surface;

pub use controller::{
    Controller, ControllerBuilder, ControllerConfig, ControllerConfigBuilder,
    Notices, Submission,
};
pub use error::RequestFailure;
