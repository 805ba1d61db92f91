//! Shared types for talking to an answering service.
//!
//! This crate defines the payloads exchanged with the `/ask` endpoint and
//! the [`AskService`] trait that every service implementation adheres to,
//! so that the conversation controller never depends on a concrete
//! transport.
//!
//! Types in this crate don't define any behavior beyond (de)serialization,
//! they are the constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod message;
mod request;
mod response;
mod service;

pub use error::*;
pub use message::*;
pub use request::*;
pub use response::*;
pub use service::*;
