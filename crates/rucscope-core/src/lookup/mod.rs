//! Record lookup domain module.
//!
//! # Module Structure
//!
//! - `identifier`: The two identifier kinds and their input rules
//! - `model`: The taxpayer record returned by a lookup

mod identifier;
mod model;

pub use identifier::{IdentifierKind, validate_identifier};
pub use model::LookupResult;
