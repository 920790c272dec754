//! Backend API port.
//!
//! # Module Structure
//!
//! - `backend`: The `ApiBackend` trait, one method per backend operation
//! - `login`: Login request/response payloads

mod backend;
mod login;

pub use backend::ApiBackend;
pub use login::{LoginRequest, LoginResponse};
