//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile returned by the backend on login

mod model;

pub use model::User;
