//! Navigation domain module.
//!
//! Components never navigate on their own. They return a [`Navigation`]
//! outcome and the shell hands it to its single [`Navigator`].

mod navigator;
mod route;

pub use navigator::{Navigation, Navigator};
pub use route::Route;
