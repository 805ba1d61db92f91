//! An out-of-the-box chat client that asks questions to a remote service.
//!
//! The crate includes a CLI tool for using in the terminal. And you can also
//! use it as a library to bring the conversation loop into your own host
//! apps, by providing a [`core::surface::Surface`] to render to.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod session;
#[cfg(feature = "cli")]
pub mod terminal;

pub use session::{Session, SessionBuilder};

/// Re-exports of [`askbox_core`] crate.
pub mod core {
    pub use askbox_core::*;
}

/// Re-exports of [`askbox_http_service`] crate.
pub mod http {
    pub use askbox_http_service::*;
}
