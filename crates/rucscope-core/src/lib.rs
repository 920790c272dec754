//! Domain layer of the rucscope client.
//!
//! Holds the data model, the error type, and the traits the other layers
//! plug into: [`session::SessionStore`] for the persisted session,
//! [`api::ApiBackend`] for the HTTP backend, and
//! [`navigation::Navigator`] for view changes.

pub mod api;
pub mod audit_log;
pub mod config;
pub mod error;
pub mod lookup;
pub mod navigation;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{ClientError, Result};
