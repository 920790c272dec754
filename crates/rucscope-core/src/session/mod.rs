//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: The token/user pair held between login and logout
//! - `store`: Storage abstraction for the persisted session

mod model;
mod store;

pub use model::Session;
pub use store::SessionStore;
