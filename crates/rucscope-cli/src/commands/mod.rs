pub mod auth;
pub mod logs;
pub mod lookup;
pub mod open;
pub mod render;
