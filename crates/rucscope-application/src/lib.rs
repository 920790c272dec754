//! Application layer for rucscope.
//!
//! This crate provides the view controllers of the client. Each one
//! coordinates the [`rucscope_core::api::ApiBackend`] and the
//! [`rucscope_core::session::SessionStore`] and exposes an observable state
//! that a shell (CLI, GUI) renders.

pub mod auth_gateway;
pub mod log_query_controller;
pub mod record_lookup_controller;
pub mod request_sequence;
pub mod route_guard;

#[cfg(test)]
mod test_support;

pub use auth_gateway::AuthGateway;
pub use log_query_controller::{LogQueryController, LogViewState, QueryOutcome};
pub use record_lookup_controller::{LookupOutcome, LookupViewState, RecordLookupController};
pub use request_sequence::RequestSequence;
pub use route_guard::{GuardActivation, GuardState, RouteGuard};
